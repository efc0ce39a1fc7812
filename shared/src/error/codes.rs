//! Unified error codes for the hotel API
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Hotel errors
//! - 2xxx: Room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are `u16` values so they serialize the same way in logs and in any
/// client that wants to switch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Request timed out before a response was produced
    RequestTimeout = 9,

    // ==================== 1xxx: Hotel ====================
    HotelNotFound = 1001,
    HotelCreateFailed = 1002,
    HotelUpdateFailed = 1003,
    HotelDeleteFailed = 1004,

    // ==================== 2xxx: Room ====================
    RoomNotFound = 2001,
    RoomCreateFailed = 2002,
    RoomUpdateFailed = 2003,
    RoomDeleteFailed = 2004,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation Error",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequestTimeout => "Request timed out",

            // Hotel
            ErrorCode::HotelNotFound => "Hotel not found",
            ErrorCode::HotelCreateFailed => "Failed to create hotel",
            ErrorCode::HotelUpdateFailed => "Failed to update hotel",
            ErrorCode::HotelDeleteFailed => "Failed to delete hotel",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomCreateFailed => "Failed to create room",
            ErrorCode::RoomUpdateFailed => "Failed to update room",
            ErrorCode::RoomDeleteFailed => "Failed to delete room",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when a `u16` does not name any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            9 => ErrorCode::RequestTimeout,
            1001 => ErrorCode::HotelNotFound,
            1002 => ErrorCode::HotelCreateFailed,
            1003 => ErrorCode::HotelUpdateFailed,
            1004 => ErrorCode::HotelDeleteFailed,
            2001 => ErrorCode::RoomNotFound,
            2002 => ErrorCode::RoomCreateFailed,
            2003 => ErrorCode::RoomUpdateFailed,
            2004 => ErrorCode::RoomDeleteFailed,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::HotelNotFound.code(), 1001);
        assert_eq!(ErrorCode::RoomDeleteFailed.code(), 2004);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_roundtrips_known_codes() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::HotelUpdateFailed,
            ErrorCode::RoomCreateFailed,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::RoomNotFound).unwrap();
        assert_eq!(json, "2001");
        let code: ErrorCode = serde_json::from_str("1002").unwrap();
        assert_eq!(code, ErrorCode::HotelCreateFailed);
    }

    #[test]
    fn test_resource_messages() {
        assert_eq!(ErrorCode::HotelNotFound.message(), "Hotel not found");
        assert_eq!(ErrorCode::RoomUpdateFailed.message(), "Failed to update room");
        assert_eq!(ErrorCode::ValidationFailed.message(), "Validation Error");
    }
}
