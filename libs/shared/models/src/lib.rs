pub mod booking;
pub mod error;
pub mod status;

pub use booking::*;
pub use error::AppError;
pub use status::{StatusKind, StatusMessage};
