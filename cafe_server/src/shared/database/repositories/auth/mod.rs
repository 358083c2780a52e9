// Auth repositories
pub mod user_repository;
pub mod role_repository;

pub use user_repository::*;
pub use role_repository::*;
