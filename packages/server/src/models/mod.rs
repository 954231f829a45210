pub mod blog;
pub mod project;
pub mod shared;
