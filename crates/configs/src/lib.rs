use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

/// Logging output options; `json = true` switches to structured output.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub json: bool,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/parcels.db?mode=rwc";

/// Idle timeout and max lifetime for in-memory SQLite pools (about 100 years).
/// Closing the last connection drops the database, so it must never be recycled.
pub const MEMORY_CONNECTION_LIFETIME_SECS: u64 = 100 * 365 * 24 * 60 * 60;

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load [`config_path`], apply env overrides and validate.
    /// A missing config file yields defaults.
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(&config_path())
    }

    pub fn load_or_default_from(path: &str) -> Result<Self> {
        let mut cfg = if Path::new(path).exists() {
            load_from_file(path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.port = port
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT must be a number in 1..=65535, got {port:?}"))?;
        }
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Single-connection in-memory SQLite; every connect yields an empty database.
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout_secs: MEMORY_CONNECTION_LIFETIME_SECS,
            max_lifetime_secs: MEMORY_CONNECTION_LIFETIME_SECS,
            ..Self::default()
        }
    }

    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
        if self.is_sqlite_memory() {
            self.idle_timeout_secs = MEMORY_CONNECTION_LIFETIME_SECS;
            self.max_lifetime_secs = MEMORY_CONNECTION_LIFETIME_SECS;
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    /// `sqlite::memory:` and `sqlite:...?mode=memory` style URLs.
    pub fn is_sqlite_memory(&self) -> bool {
        let lower = self.url.to_lowercase();
        self.is_sqlite() && (lower.contains(":memory:") || lower.contains("mode=memory"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:") || lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
