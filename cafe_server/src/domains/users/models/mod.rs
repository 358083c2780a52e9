// Users domain models
pub mod user_admin;

pub use user_admin::*;
