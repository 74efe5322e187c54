//! HTTP boundary: routing, response envelope, error classification

mod envelope;
mod handler;

pub use envelope::{
    ApiError, ApiResponse, INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST, NOT_FOUND,
    SUCCESS_MESSAGE,
};
pub use handler::{NpvApi, CALCULATE_PATH};
