//! Utility Module
//!
//! Error re-exports from `shared` and the logging setup.

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, FieldError};

use crate::db::repository::RepoError;

/// Generic mapping for callers without a resource-specific error code.
///
/// Resource handlers use their own codes, see `api::crud`.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::NoRowsAffected(msg) => AppError::internal(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}
