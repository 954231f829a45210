pub mod blog;
pub mod project;
