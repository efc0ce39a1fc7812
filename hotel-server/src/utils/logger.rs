//! Logging Infrastructure
//!
//! Console output always; a daily rotating JSON file as well when `LOG_DIR`
//! names an existing directory. `RUST_LOG` takes precedence over the
//! configured level.

use std::path::Path;
use std::sync::Mutex;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::{Result, ServerError};

/// Initialize the global subscriber
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// hotel_server::init_logger("debug", false, None)?;
///
/// // Production setup (JSON console + file)
/// hotel_server::init_logger("info", true, Some("./logs"))?;
/// # Ok::<(), hotel_server::ServerError>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    let file_layer = match log_dir {
        Some(dir) if Path::new(dir).is_dir() => {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "hotel-server");
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(appender)),
            )
        }
        Some(dir) => {
            eprintln!("LOG_DIR {dir} is not a directory, logging to console only");
            None
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ServerError::Logger(e.to_string()))
}
