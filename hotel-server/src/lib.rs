//! Hotel Server - REST API for hotels and rooms backed by SQLite
//!
//! # Modules
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── api/           # routes and handlers
//! ├── validation/    # payload schemas and the ValidatedJson extractor
//! ├── middleware/    # request logging
//! ├── db/            # pool, statement gateway, repositories
//! └── utils/         # error re-exports, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;
pub mod validation;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::logger::init_logger;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> core::Result<Config> {
    // A missing .env file is normal
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __
   / / / /___  / /____  / /
  / /_/ / __ \/ __/ _ \/ /
 / __  / /_/ / /_/  __/ /
/_/ /_/\____/\__/\___/_/
    "#
    );
}
