use crate::core::{Config, Result};
use crate::db::DbService;

/// State shared by every handler
///
/// Cloning is cheap: `DbService` wraps a reference-counted pool.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the configured database and apply migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        tracing::info!(path = %config.database_path, "Opening database");
        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }
}
