//! Room API Handlers

use axum::extract::{Path, State};
use http::StatusCode;
use shared::models::{Room, RoomCreate, RoomUpdate};

use crate::api::crud::{self, Envelope};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::validation::ValidatedJson;

pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Room>>> {
    crud::list(&state.db).await
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Room>> {
    crud::get(&state.db, &id).await
}

pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<RoomCreate>,
) -> AppResult<(StatusCode, Envelope<Room>)> {
    crud::create::<Room>(&state.db, &payload).await
}

/// Full replace, no merge with the stored row
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<RoomUpdate>,
) -> AppResult<Envelope<Room>> {
    crud::require::<Room>(&state.db, &id).await?;
    crud::replace::<Room>(&state.db, &id, &payload).await
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Room>> {
    crud::delete(&state.db, &id).await
}
