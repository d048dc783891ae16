//! API request/response types

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType, INVALID_CREDENTIALS_MESSAGE};
pub use json::Json;
