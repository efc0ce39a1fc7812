//! Room Model

use serde::{Deserialize, Serialize};

/// Room entity
///
/// `Status` is a free-form label ("Available", "Occupied", ...), not an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Room {
    #[serde(rename = "RoomID")]
    #[cfg_attr(feature = "db", sqlx(rename = "RoomID"))]
    pub room_id: i64,
    #[serde(rename = "RoomNumber")]
    #[cfg_attr(feature = "db", sqlx(rename = "RoomNumber"))]
    pub room_number: String,
    #[serde(rename = "Type")]
    #[cfg_attr(feature = "db", sqlx(rename = "Type"))]
    pub room_type: String,
    #[serde(rename = "Price")]
    #[cfg_attr(feature = "db", sqlx(rename = "Price"))]
    pub price: f64,
    #[serde(rename = "Status")]
    #[cfg_attr(feature = "db", sqlx(rename = "Status"))]
    pub status: String,
}

/// Create room payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCreate {
    #[serde(rename = "RoomNumber")]
    pub room_number: String,
    #[serde(rename = "Type")]
    pub room_type: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Status")]
    pub status: String,
}

/// Update room payload
///
/// Rooms are replaced wholesale on update, so the payload is the full record.
pub type RoomUpdate = RoomCreate;
