//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! the listening endpoint, the container health-probe contract, HTTP cache
//! TTLs, and default paths. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Service Endpoint and Health Probe Contract
// =============================================================================
// The deployment environment probes GET /health on the port below. The probe
// schedule (interval, timeout, start period, retries) is enforced by the
// orchestrator, not by this process; the constants are kept here so the code
// and the deployment manifest agree on a single source.

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "Golden Dawn Tarot";

/// Default TCP port the service listens on
pub const DEFAULT_PORT: u16 = 7870;

/// Seconds between health probes
pub const HEALTH_CHECK_INTERVAL_SECS: u64 = 30;

/// Seconds a probe may take before it is scored a failure
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 10;

/// Grace period after launch during which failed probes are not counted
pub const HEALTH_CHECK_START_PERIOD_SECS: u64 = 5;

/// Consecutive failures (past the start period) before the instance is
/// considered unhealthy by the orchestrator
pub const HEALTH_CHECK_RETRIES: u32 = 3;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches. All values are in seconds.

/// Deck and spread listings - fixed data, safe to cache for a while
pub const HTTP_CACHE_DECK_MAX_AGE: u32 = 3600;

/// Landing page - short cache
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

/// Static assets (card imagery) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_DECK: &str = formatcp!("public, max-age={}", HTTP_CACHE_DECK_MAX_AGE);

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

/// Health responses must never be cached; the probe needs a fresh answer
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Log file written into the logs persistent directory
pub const LOG_FILE_NAME: &str = "arcana.log";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "arcana=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Persistent storage directories
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Filesystem layout the running process depends on.
///
/// `readings_dir` and `logs_dir` are persistent write paths (volume-mounted in
/// a container); `static_dir` is a read path populated at image-build time.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_readings_dir")]
    pub readings_dir: PathBuf,
    #[serde(default = "StorageConfig::default_logs_dir")]
    pub logs_dir: PathBuf,
    #[serde(default = "StorageConfig::default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            readings_dir: Self::default_readings_dir(),
            logs_dir: Self::default_logs_dir(),
            static_dir: Self::default_static_dir(),
        }
    }
}

impl StorageConfig {
    fn default_readings_dir() -> PathBuf {
        PathBuf::from("readings")
    }

    fn default_logs_dir() -> PathBuf {
        PathBuf::from("logs")
    }

    fn default_static_dir() -> PathBuf {
        PathBuf::from("static")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the given path, falling back to built-in
    /// defaults when the file does not exist.
    ///
    /// The launch command takes no required arguments, so a missing default
    /// config file is not an error: every setting has a usable default.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_deployment_contract() {
        let config = AppConfig::default();
        assert_eq!(config.http.port, 7870);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.storage.readings_dir, PathBuf::from("readings"));
        assert_eq!(config.storage.logs_dir, PathBuf::from("logs"));
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn load_parses_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http]\nport = 8080\n\n[storage]\nreadings_dir = \"/data/readings\""
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 8080);
        // Unspecified fields fall back to defaults
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.storage.readings_dir, PathBuf::from("/data/readings"));
        assert_eq!(config.storage.logs_dir, PathBuf::from("logs"));
    }

    #[test]
    fn load_or_default_without_file() {
        let config = AppConfig::load_or_default("/nonexistent/arcana.toml").unwrap();
        assert_eq!(config.http.port, 7870);
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
