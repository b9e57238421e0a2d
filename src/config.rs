//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The database connection string is
//! taken from `DATABASE_URL` or, when unset, assembled from the
//! individual `POSTGRES_*` variables.

use std::net::SocketAddr;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`QuizConfig::from_env`].
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// When `false`, questions live in process memory instead of PostgreSQL.
    pub persistence_enabled: bool,

    /// Log output format.
    pub log_format: LogFormat,
}

impl QuizConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 1);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let persistence_enabled = parse_env_bool("PERSISTENCE_ENABLED", true);
        let log_format = parse_log_format(std::env::var("LOG_FORMAT").ok().as_deref());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
            persistence_enabled,
            log_format,
        })
    }
}

/// Builds a connection string from `POSTGRES_HOST`, `POSTGRES_PORT`,
/// `POSTGRES_USERNAME`, `POSTGRES_PASSWORD` and `POSTGRES_DATABASE`.
fn database_url_from_parts() -> String {
    let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port: u16 = parse_env("POSTGRES_PORT", 5432);
    let username = std::env::var("POSTGRES_USERNAME").unwrap_or_else(|_| "quiz".to_string());
    let password = std::env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "quiz".to_string());
    let database = std::env::var("POSTGRES_DATABASE").unwrap_or_else(|_| "quiz".to_string());
    format_database_url(&host, port, &username, &password, &database)
}

fn format_database_url(
    host: &str,
    port: u16,
    username: &str,
    password: &str,
    database: &str,
) -> String {
    format!("postgres://{username}:{password}@{host}:{port}/{database}")
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref(), default)
}

fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_is_assembled_from_parts() {
        let url = format_database_url("db", 5433, "alice", "secret", "quiz");
        assert_eq!(url, "postgres://alice:secret@db:5433/quiz");
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert!(parse_bool(Some("TRUE"), false));
        assert!(parse_bool(Some("1"), false));
        assert!(!parse_bool(Some("False"), true));
        assert!(!parse_bool(Some("0"), true));
        assert!(parse_bool(Some("maybe"), true));
        assert!(!parse_bool(None, false));
    }

    #[test]
    fn log_format_defaults_to_text() {
        assert_eq!(parse_log_format(None), LogFormat::Text);
        assert_eq!(parse_log_format(Some("pretty")), LogFormat::Text);
        assert_eq!(parse_log_format(Some("JSON")), LogFormat::Json);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u32 = parse_env("QUIZ_SERVICE_TEST_UNSET_KEY", 7);
        assert_eq!(value, 7);
    }
}
