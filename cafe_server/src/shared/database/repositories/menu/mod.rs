// Menu repositories
pub mod menu_repository;

pub use menu_repository::*;
