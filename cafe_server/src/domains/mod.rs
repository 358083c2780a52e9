// Domain modules
pub mod auth;
pub mod menu;
pub mod order;
pub mod users;
