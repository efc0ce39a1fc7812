//! Shared types for the hotel API
//!
//! Common types used by the server and its clients: the error system,
//! the response envelope and the Hotel/Room data models.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCode, FieldError};
