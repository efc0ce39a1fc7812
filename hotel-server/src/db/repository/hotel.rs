//! Hotel Repository

use super::Resource;
use crate::db::SqlValue;
use shared::models::{Hotel, HotelCreate};

impl Resource for Hotel {
    type Write = HotelCreate;

    const TABLE: &'static str = "Hotel";

    const SELECT_ALL: &'static str =
        "SELECT HotelID, name, location, rating, contact FROM Hotel ORDER BY HotelID";
    const SELECT_BY_ID: &'static str =
        "SELECT HotelID, name, location, rating, contact FROM Hotel WHERE HotelID = ?1";
    const INSERT: &'static str =
        "INSERT INTO Hotel (name, location, rating, contact) VALUES (?1, ?2, ?3, ?4)";
    const UPDATE: &'static str = "UPDATE Hotel SET name = ?1, location = ?2, rating = ?3, contact = ?4 WHERE HotelID = ?5";
    const DELETE: &'static str = "DELETE FROM Hotel WHERE HotelID = ?1";

    fn write_params(data: &HotelCreate) -> Vec<SqlValue> {
        vec![
            data.name.as_str().into(),
            data.location.as_str().into(),
            data.rating.into(),
            data.contact.as_str().into(),
        ]
    }
}
