// Middleware module
pub mod auth;
pub mod extractors;

pub use auth::*;
