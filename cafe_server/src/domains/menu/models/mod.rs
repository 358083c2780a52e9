// Menu domain models
pub mod menu;

pub use menu::*;
