// Menu domain services
pub mod menu_service;
pub mod state;

pub use menu_service::*;
pub use state::*;
