use std::str::FromStr;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | app.db | SQLite file, created if missing |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 3000 | Bind port |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
/// | LOG_LEVEL | info | Default log level |
/// | LOG_DIR | (unset) | Directory for rolling log files |
/// | ENVIRONMENT | development | development / staging / production |
///
/// Values that fail to parse fall back to the default.
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/hotels.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_host: String,
    pub http_port: u16,
    pub db_max_connections: u32,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_path: lookup("DATABASE_PATH").unwrap_or_else(|| "app.db".into()),
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or(lookup("HTTP_PORT"), 3000),
            db_max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), 5),
            request_timeout_ms: parse_or(lookup("REQUEST_TIMEOUT_MS"), 30_000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path, "app.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_PATH", "/data/hotels.db"),
            ("HTTP_HOST", "127.0.0.1"),
            ("HTTP_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "10"),
            ("ENVIRONMENT", "production"),
            ("LOG_DIR", "/var/log/hotel"),
        ]);
        assert_eq!(config.database_path, "/data/hotels.db");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/hotel"));
        assert!(config.is_production());
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = config_from(&[
            ("HTTP_PORT", "eighty"),
            ("DB_MAX_CONNECTIONS", "-1"),
            ("REQUEST_TIMEOUT_MS", ""),
        ]);
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.request_timeout_ms, 30_000);
    }
}
