// Order domain services
pub mod order_service;
pub mod state;

pub use order_service::*;
pub use state::*;
