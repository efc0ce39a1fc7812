//! Payload schemas for the Hotel and Room resources

use super::{FieldKind, FieldSpec, Rule, Schema, Validated};
use shared::models::{HotelCreate, HotelUpdate, RoomCreate};

const HOTEL_NAME_TOO_SHORT: &str = "ชื่อโรงแรมต้องยาวอย่างน้อย 3 ตัว";
const HOTEL_LOCATION_REQUIRED: &str = "กรุณากรอกสถานที่";
const HOTEL_CONTACT_REQUIRED: &str = "กรุณากรอกข้อมูลติดต่อ";
const RATING_TOO_LOW: &str = "Number must be greater than or equal to 0";
const RATING_TOO_HIGH: &str = "Number must be less than or equal to 5";

const NAME_RULES: &[Rule] = &[Rule::MinLength(3, HOTEL_NAME_TOO_SHORT)];
const LOCATION_RULES: &[Rule] = &[Rule::MinLength(3, HOTEL_LOCATION_REQUIRED)];
const RATING_RULES: &[Rule] = &[Rule::Min(0.0, RATING_TOO_LOW), Rule::Max(5.0, RATING_TOO_HIGH)];
const CONTACT_RULES: &[Rule] = &[Rule::MinLength(5, HOTEL_CONTACT_REQUIRED)];

const fn hotel_fields(required: bool) -> [FieldSpec; 4] {
    [
        FieldSpec {
            name: "name",
            kind: FieldKind::Text,
            required,
            type_message: None,
            rules: NAME_RULES,
        },
        FieldSpec {
            name: "location",
            kind: FieldKind::Text,
            required,
            type_message: None,
            rules: LOCATION_RULES,
        },
        FieldSpec {
            name: "rating",
            kind: FieldKind::Number,
            required,
            type_message: None,
            rules: RATING_RULES,
        },
        FieldSpec {
            name: "contact",
            kind: FieldKind::Text,
            required,
            type_message: None,
            rules: CONTACT_RULES,
        },
    ]
}

const HOTEL_CREATE_FIELDS: [FieldSpec; 4] = hotel_fields(true);
const HOTEL_UPDATE_FIELDS: [FieldSpec; 4] = hotel_fields(false);

/// POST /api/hotels: every field required
pub const HOTEL_CREATE: Schema = Schema {
    fields: &HOTEL_CREATE_FIELDS,
};

/// PUT /api/hotels/{id}: same constraints, every field optional
pub const HOTEL_UPDATE: Schema = Schema {
    fields: &HOTEL_UPDATE_FIELDS,
};

/// POST and PUT /api/room: every field required (PUT replaces the row)
pub const ROOM_WRITE: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "RoomNumber",
            kind: FieldKind::Text,
            required: true,
            type_message: Some("กรุณากรอกเลขห้อง"),
            rules: &[Rule::MinLength(1, "เลขห้องห้ามว่าง")],
        },
        FieldSpec {
            name: "Type",
            kind: FieldKind::Text,
            required: true,
            type_message: Some("กรุณากรอกประเภทห้อง"),
            rules: &[Rule::MinLength(1, "ประเภทห้องห้ามว่าง")],
        },
        FieldSpec {
            name: "Price",
            kind: FieldKind::Number,
            required: true,
            type_message: Some("ราคาต้องเป็นตัวเลข"),
            rules: &[Rule::Positive("ราคาต้องมากกว่า 0")],
        },
        FieldSpec {
            name: "Status",
            kind: FieldKind::Text,
            required: true,
            type_message: Some("กรุณากรอกสถานะห้อง"),
            rules: &[Rule::MinLength(1, "สถานะห้องห้ามว่าง")],
        },
    ],
};

impl Validated for HotelCreate {
    fn schema() -> &'static Schema {
        &HOTEL_CREATE
    }
}

impl Validated for HotelUpdate {
    fn schema() -> &'static Schema {
        &HOTEL_UPDATE
    }
}

/// Also covers `RoomUpdate`, which is the same type
impl Validated for RoomCreate {
    fn schema() -> &'static Schema {
        &ROOM_WRITE
    }
}
