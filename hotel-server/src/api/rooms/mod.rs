//! Room API
//!
//! Mounted at `/api/room`. PUT takes the full record and replaces the row.

mod handler;

use axum::{Router, routing::get};
use shared::models::Room;

use super::crud::ApiResource;
use crate::core::ServerState;
use crate::utils::ErrorCode;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/room", routes())
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

impl ApiResource for Room {
    const NOT_FOUND: ErrorCode = ErrorCode::RoomNotFound;
    const CREATE_FAILED: ErrorCode = ErrorCode::RoomCreateFailed;
    const UPDATE_FAILED: ErrorCode = ErrorCode::RoomUpdateFailed;
    const DELETE_FAILED: ErrorCode = ErrorCode::RoomDeleteFailed;

    const LISTED: &'static str = "All rooms";
    const CREATED: &'static str = "Room created";
    const UPDATED: &'static str = "Room updated";
    const DELETED: &'static str = "Room deleted";

    fn fetched(id: &str) -> String {
        format!("Room for ID: {id}")
    }
}
