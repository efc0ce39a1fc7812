//! Hotel API Handlers

use axum::extract::{Path, State};
use http::StatusCode;
use shared::models::{Hotel, HotelCreate, HotelUpdate};

use crate::api::crud::{self, Envelope};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::validation::ValidatedJson;

/// GET /api/hotels
pub async fn list(State(state): State<ServerState>) -> AppResult<Envelope<Vec<Hotel>>> {
    crud::list(&state.db).await
}

/// GET /api/hotels/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Hotel>> {
    crud::get(&state.db, &id).await
}

/// POST /api/hotels
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<HotelCreate>,
) -> AppResult<(StatusCode, Envelope<Hotel>)> {
    crud::create::<Hotel>(&state.db, &payload).await
}

/// PUT /api/hotels/{id} - fields present in the body replace the stored ones
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<HotelUpdate>,
) -> AppResult<Envelope<Hotel>> {
    let existing = crud::require::<Hotel>(&state.db, &id).await?;
    let merged = payload.merge_onto(&existing);
    crud::replace::<Hotel>(&state.db, &id, &merged).await
}

/// DELETE /api/hotels/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Envelope<Hotel>> {
    crud::delete(&state.db, &id).await
}
