//! Room Repository

use super::Resource;
use crate::db::SqlValue;
use shared::models::{Room, RoomCreate};

impl Resource for Room {
    type Write = RoomCreate;

    const TABLE: &'static str = "Room";

    const SELECT_ALL: &'static str =
        "SELECT RoomID, RoomNumber, Type, Price, Status FROM Room ORDER BY RoomID";
    const SELECT_BY_ID: &'static str =
        "SELECT RoomID, RoomNumber, Type, Price, Status FROM Room WHERE RoomID = ?1";
    const INSERT: &'static str =
        "INSERT INTO Room (RoomNumber, Type, Price, Status) VALUES (?1, ?2, ?3, ?4)";
    const UPDATE: &'static str =
        "UPDATE Room SET RoomNumber = ?1, Type = ?2, Price = ?3, Status = ?4 WHERE RoomID = ?5";
    const DELETE: &'static str = "DELETE FROM Room WHERE RoomID = ?1";

    fn write_params(data: &RoomCreate) -> Vec<SqlValue> {
        vec![
            data.room_number.as_str().into(),
            data.room_type.as_str().into(),
            data.price.into(),
            data.status.as_str().into(),
        ]
    }
}
