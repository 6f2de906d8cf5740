//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `FOUNDATION_DB_PATH` | unset (in-memory database) |
//! | `FOUNDATION_LOG_LEVEL` | build default |
//! | `FOUNDATION_LOG_DIR` | unset (stderr) |
//! | `FOUNDATION_SEED_SAMPLE` | `false` |

use foundation_core::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidAddress(String),
    InvalidLogLevel(String),
    InvalidLogDir(String),
    InvalidFlag { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "PORT must be a valid number, got `{value}`"),
            Self::InvalidAddress(value) => write!(f, "invalid HOST:PORT configuration `{value}`"),
            Self::InvalidLogLevel(message) | Self::InvalidLogDir(message) => {
                write!(f, "{message}")
            }
            Self::InvalidFlag { name, value } => {
                write!(f, "{name} must be true|false|1|0, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for one server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// `None` runs against an in-memory database.
    pub db_path: Option<PathBuf>,
    pub log_level: &'static str,
    /// `None` logs to stderr.
    pub log_dir: Option<String>,
    pub seed_sample: bool,
}

impl ServerConfig {
    /// Reads the process environment, loading `.env` first when present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };
        let addr_text = format!("{host}:{port}");
        let addr = addr_text
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress(addr_text.clone()))?;

        let log_level = match read("FOUNDATION_LOG_LEVEL") {
            Some(value) => normalize_level(&value).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        let log_dir = match read("FOUNDATION_LOG_DIR") {
            Some(value) => {
                normalize_log_dir(&value).map_err(ConfigError::InvalidLogDir)?;
                Some(value)
            }
            None => None,
        };

        let seed_sample = match read("FOUNDATION_SEED_SAMPLE") {
            Some(value) => parse_flag("FOUNDATION_SEED_SAMPLE", &value)?,
            None => false,
        };

        Ok(Self {
            addr,
            db_path: read("FOUNDATION_DB_PATH").map(PathBuf::from),
            log_level,
            log_dir,
            seed_sample,
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> ConfigResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig};
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.db_path, None);
        assert_eq!(config.log_dir, None);
        assert!(!config.seed_sample);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("FOUNDATION_DB_PATH", "/var/lib/foundation/catalog.db"),
            ("FOUNDATION_LOG_LEVEL", "WARNING"),
            ("FOUNDATION_SEED_SAMPLE", "true"),
        ])
        .unwrap();

        assert_eq!(config.addr.to_string(), "127.0.0.1:9000");
        assert_eq!(
            config.db_path.as_deref(),
            Some(std::path::Path::new("/var/lib/foundation/catalog.db"))
        );
        assert_eq!(config.log_level, "warn");
        assert!(config.seed_sample);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("FOUNDATION_DB_PATH", "")]).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.db_path, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert!(matches!(
            config_from(&[("HOST", "not a host")]),
            Err(ConfigError::InvalidAddress(_))
        ));
        assert!(matches!(
            config_from(&[("FOUNDATION_LOG_LEVEL", "loud")]),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            config_from(&[("FOUNDATION_LOG_DIR", "relative/logs")]),
            Err(ConfigError::InvalidLogDir(_))
        ));
        assert!(matches!(
            config_from(&[("FOUNDATION_SEED_SAMPLE", "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
