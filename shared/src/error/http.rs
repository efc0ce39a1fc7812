//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::HotelNotFound | Self::RoomNotFound => StatusCode::NOT_FOUND,

            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,

            // Mutations that reached the store but changed nothing
            Self::HotelCreateFailed
            | Self::HotelUpdateFailed
            | Self::HotelDeleteFailed
            | Self::RoomCreateFailed
            | Self::RoomUpdateFailed
            | Self::RoomDeleteFailed
            | Self::InternalError
            | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            Self::ValidationFailed => StatusCode::BAD_REQUEST,
        }
    }
}
