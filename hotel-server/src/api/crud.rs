//! Generic resource handlers
//!
//! Hotels and rooms expose the same five operations; only the messages and
//! error codes differ. Route handlers extract the request and delegate here.

use axum::Json;
use http::StatusCode;
use serde::Serialize;

use crate::db::DbService;
use crate::db::repository::{self, RepoError, Resource};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub type Envelope<T> = Json<ApiResponse<T>>;

/// A [`Resource`] served over HTTP
pub trait ApiResource: Resource + Serialize {
    const NOT_FOUND: ErrorCode;
    const CREATE_FAILED: ErrorCode;
    const UPDATE_FAILED: ErrorCode;
    const DELETE_FAILED: ErrorCode;

    const LISTED: &'static str;
    const CREATED: &'static str;
    const UPDATED: &'static str;
    const DELETED: &'static str;

    /// Message for a single-row read
    fn fetched(id: &str) -> String;
}

/// Map a repository failure onto the resource's own codes.
///
/// `failed` is the code reported when the statement changed nothing.
fn repo_error<R: ApiResource>(err: RepoError, failed: ErrorCode) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::new(R::NOT_FOUND),
        RepoError::NoRowsAffected(detail) => {
            tracing::warn!(table = R::TABLE, %detail, "Statement affected no rows");
            AppError::new(failed)
        }
        RepoError::Database(msg) => AppError::database(msg),
    }
}

pub async fn list<R: ApiResource>(db: &DbService) -> AppResult<Envelope<Vec<R>>> {
    let rows = repository::find_all::<R>(db).await?;
    Ok(Json(ApiResponse::success(R::LISTED, rows)))
}

/// Fetch one row or fail with the resource's not-found error
pub async fn require<R: ApiResource>(db: &DbService, id: &str) -> AppResult<R> {
    repository::find_by_id::<R>(db, id)
        .await?
        .ok_or_else(|| AppError::new(R::NOT_FOUND))
}

pub async fn get<R: ApiResource>(db: &DbService, id: &str) -> AppResult<Envelope<R>> {
    let row = require::<R>(db, id).await?;
    Ok(Json(ApiResponse::success(R::fetched(id), row)))
}

pub async fn create<R: ApiResource>(
    db: &DbService,
    data: &R::Write,
) -> AppResult<(StatusCode, Envelope<R>)> {
    let row = repository::create::<R>(db, data)
        .await
        .map_err(|e| repo_error::<R>(e, R::CREATE_FAILED))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(R::CREATED, row))))
}

/// Overwrite every column of an existing row.
///
/// Callers check existence first with [`require`]; a row deleted in between
/// surfaces as the update-failed error.
pub async fn replace<R: ApiResource>(
    db: &DbService,
    id: &str,
    data: &R::Write,
) -> AppResult<Envelope<R>> {
    let row = repository::update::<R>(db, id, data)
        .await
        .map_err(|e| repo_error::<R>(e, R::UPDATE_FAILED))?;
    Ok(Json(ApiResponse::success(R::UPDATED, row)))
}

/// Delete a row and answer with its contents before deletion
pub async fn delete<R: ApiResource>(db: &DbService, id: &str) -> AppResult<Envelope<R>> {
    let existing = require::<R>(db, id).await?;
    repository::delete::<R>(db, id)
        .await
        .map_err(|e| repo_error::<R>(e, R::DELETE_FAILED))?;
    tracing::info!(table = R::TABLE, id, "Row deleted");
    Ok(Json(ApiResponse::success(R::DELETED, existing)))
}
