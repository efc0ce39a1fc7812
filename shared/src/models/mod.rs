//! Data models
//!
//! Shared between the server and any API client.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY AUTOINCREMENT).
//! JSON field names follow the table columns (`HotelID`, `RoomNumber`, ...).

pub mod hotel;
pub mod room;

// Re-exports
pub use hotel::*;
pub use room::*;
