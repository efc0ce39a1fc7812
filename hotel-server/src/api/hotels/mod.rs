//! Hotel API
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | GET | /api/hotels | |
//! | GET | /api/hotels/{id} | |
//! | POST | /api/hotels | `HotelCreate` |
//! | PUT | /api/hotels/{id} | `HotelUpdate` (partial, merged onto the stored row) |
//! | DELETE | /api/hotels/{id} | |

mod handler;

use axum::{Router, routing::get};
use shared::models::Hotel;

use super::crud::ApiResource;
use crate::core::ServerState;
use crate::utils::ErrorCode;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/hotels", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

impl ApiResource for Hotel {
    const NOT_FOUND: ErrorCode = ErrorCode::HotelNotFound;
    const CREATE_FAILED: ErrorCode = ErrorCode::HotelCreateFailed;
    const UPDATE_FAILED: ErrorCode = ErrorCode::HotelUpdateFailed;
    const DELETE_FAILED: ErrorCode = ErrorCode::HotelDeleteFailed;

    const LISTED: &'static str = "All hotels";
    const CREATED: &'static str = "Hotel created";
    const UPDATED: &'static str = "Hotel updated successfully";
    const DELETED: &'static str = "Hotel deleted successfully";

    fn fetched(id: &str) -> String {
        format!("Hotel ID: {id}")
    }
}
