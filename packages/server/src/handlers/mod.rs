pub mod blog;
pub mod health;
pub mod project;
