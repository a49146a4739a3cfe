use serde::Deserialize;

use fleet_core::config::Config;
use fleet_core::tracing::LogFormat;

/// Registry configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Database connection URL (`postgres://…` or `sqlite://…`). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Connection pool size (default 10). Env var: `MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Log every SQL statement. Env var: `SQLX_LOGGING`.
    #[serde(default)]
    pub sqlx_logging: bool,
    /// `json` or `pretty`. Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_max_connections() -> u32 {
    10
}

impl Config for RegistryConfig {}
