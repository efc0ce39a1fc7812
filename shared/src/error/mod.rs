//! Unified error system for the hotel API
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message and field violations
//! - [`ApiResponse`]: The `{message, data?, errors?}` response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Hotel errors
//! - 2xxx: Room errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ApiResponse, ErrorCode, FieldError};
//!
//! let err = AppError::new(ErrorCode::HotelNotFound);
//! assert_eq!(err.message, "Hotel not found");
//!
//! let err = AppError::validation(vec![FieldError::new("name", "too short")]);
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.message, "Validation Error");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, FieldError};
