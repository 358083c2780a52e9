// All repositories module
pub mod auth;
pub mod menu;
pub mod order;

// Re-export all repositories for convenience
pub use auth::*;
pub use menu::*;
pub use order::*;
