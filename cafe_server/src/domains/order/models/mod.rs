// Order domain models
pub mod order;
pub mod status;

pub use order::*;
pub use status::*;
