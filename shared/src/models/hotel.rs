//! Hotel Model

use serde::{Deserialize, Serialize};

/// Hotel entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Hotel {
    #[serde(rename = "HotelID")]
    #[cfg_attr(feature = "db", sqlx(rename = "HotelID"))]
    pub hotel_id: i64,
    pub name: String,
    pub location: String,
    /// 0.0 ..= 5.0
    pub rating: f64,
    pub contact: String,
}

/// Create hotel payload
///
/// Also the full record written back by an update after merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelCreate {
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub contact: String,
}

/// Update hotel payload (partial)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl HotelUpdate {
    /// Overlay the fields present in this update onto an existing hotel.
    ///
    /// Absent fields keep the stored value.
    pub fn merge_onto(self, existing: &Hotel) -> HotelCreate {
        HotelCreate {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            location: self.location.unwrap_or_else(|| existing.location.clone()),
            rating: self.rating.unwrap_or(existing.rating),
            contact: self.contact.unwrap_or_else(|| existing.contact.clone()),
        }
    }
}

impl From<Hotel> for HotelCreate {
    fn from(hotel: Hotel) -> Self {
        Self {
            name: hotel.name,
            location: hotel.location,
            rating: hotel.rating,
            contact: hotel.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grand_palace() -> Hotel {
        Hotel {
            hotel_id: 7,
            name: "Grand Palace".into(),
            location: "Bangkok".into(),
            rating: 4.5,
            contact: "0812345678".into(),
        }
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let update = HotelUpdate {
            rating: Some(3.0),
            ..Default::default()
        };
        let merged = update.merge_onto(&grand_palace());
        assert_eq!(merged.name, "Grand Palace");
        assert_eq!(merged.location, "Bangkok");
        assert_eq!(merged.rating, 3.0);
        assert_eq!(merged.contact, "0812345678");
    }

    #[test]
    fn test_empty_merge_is_identity() {
        let merged = HotelUpdate::default().merge_onto(&grand_palace());
        assert_eq!(merged, HotelCreate::from(grand_palace()));
    }

    #[test]
    fn test_json_uses_column_names() {
        let value = serde_json::to_value(grand_palace()).unwrap();
        assert_eq!(value["HotelID"], 7);
        assert_eq!(value["rating"], 4.5);
        assert!(value.get("hotel_id").is_none());
    }
}
