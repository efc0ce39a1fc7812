//! Repository Module
//!
//! CRUD operations over the statement gateway. Every table exposes the same
//! five statements through [`Resource`]; the functions here run them and turn
//! row counts into [`RepoError`]s.

pub mod hotel;
pub mod room;

use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;
use thiserror::Error;

use super::{DbService, SqlValue};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The statement reached the store but changed nothing
    #[error("No rows affected: {0}")]
    NoRowsAffected(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// A table with an auto-increment primary key and the standard statements.
///
/// Parameter order for `UPDATE` is the [`Resource::write_params`] list
/// followed by the id.
pub trait Resource: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Full column set written by INSERT and UPDATE
    type Write: Send + Sync;

    /// Table name, used in log and error messages
    const TABLE: &'static str;

    const SELECT_ALL: &'static str;
    const SELECT_BY_ID: &'static str;
    const INSERT: &'static str;
    const UPDATE: &'static str;
    const DELETE: &'static str;

    fn write_params(data: &Self::Write) -> Vec<SqlValue>;
}

pub async fn find_all<R: Resource>(db: &DbService) -> RepoResult<Vec<R>> {
    let rows = db.fetch_all::<R>(R::SELECT_ALL, &[]).await?;
    Ok(rows)
}

/// `id` is bound as text; SQLite coerces it against the INTEGER key.
pub async fn find_by_id<R: Resource>(db: &DbService, id: &str) -> RepoResult<Option<R>> {
    let row = db.fetch_optional::<R>(R::SELECT_BY_ID, &[id.into()]).await?;
    Ok(row)
}

/// Insert a row and read it back through its generated id
pub async fn create<R: Resource>(db: &DbService, data: &R::Write) -> RepoResult<R> {
    let outcome = db.execute(R::INSERT, &R::write_params(data)).await?;
    if outcome.rows_affected == 0 {
        return Err(RepoError::NoRowsAffected(format!("insert into {}", R::TABLE)));
    }
    let id = outcome
        .last_insert_id
        .ok_or_else(|| RepoError::Database(format!("{} insert returned no rowid", R::TABLE)))?;

    db.fetch_optional::<R>(R::SELECT_BY_ID, &[SqlValue::Integer(id)])
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to read back {} {id}", R::TABLE)))
}

/// Overwrite every column of an existing row and read it back
pub async fn update<R: Resource>(db: &DbService, id: &str, data: &R::Write) -> RepoResult<R> {
    let mut params = R::write_params(data);
    params.push(id.into());

    let outcome = db.execute(R::UPDATE, &params).await?;
    if outcome.rows_affected == 0 {
        return Err(RepoError::NoRowsAffected(format!("update {} {id}", R::TABLE)));
    }
    find_by_id::<R>(db, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("{} {id}", R::TABLE)))
}

pub async fn delete<R: Resource>(db: &DbService, id: &str) -> RepoResult<()> {
    let outcome = db.execute(R::DELETE, &[id.into()]).await?;
    if outcome.rows_affected == 0 {
        return Err(RepoError::NoRowsAffected(format!("delete {} {id}", R::TABLE)));
    }
    Ok(())
}

/// Row count of a table
#[cfg(test)]
pub async fn count<R: Resource>(db: &DbService) -> RepoResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
    let n: i64 = sqlx::query_scalar(&sql).fetch_one(&db.pool).await?;
    Ok(n)
}
