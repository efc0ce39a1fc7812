use thiserror::Error;

use crate::utils::AppError;

/// Errors that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database initialization failed: {0}")]
    Database(#[from] AppError),

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
