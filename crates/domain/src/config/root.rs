use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::record_type::RecordType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Path tried when the CLI does not name a config file.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Main configuration, loaded once at startup and immutable afterward.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Nameserver to query, as "IP" or "IP:port" (port defaults to 53)
    #[serde(default = "default_dns_server")]
    pub dns_server: String,

    /// Record types queried when the CLI does not name one
    #[serde(default = "default_record_types")]
    pub record_types: Vec<String>,

    /// Per-query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dns_server: default_dns_server(),
            record_types: default_record_types(),
            query_timeout: default_query_timeout(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Built-in defaults; carries the reason the file was not used.
    Defaults(String),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loading policy: a path the user named must load or the run fails; the
    /// implicit default path falls back to built-in defaults when unusable.
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match path {
            Some(path) => Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf()))),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                match Self::load(default_path) {
                    Ok(config) => Ok((config, ConfigSource::File(default_path.to_path_buf()))),
                    Err(err) => Ok((Self::default(), ConfigSource::Defaults(err.to_string()))),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns_server.trim().is_empty() {
            return Err(ConfigError::Invalid("dns_server cannot be empty".into()));
        }
        if self.record_types.is_empty() {
            return Err(ConfigError::Invalid("record_types cannot be empty".into()));
        }
        for name in &self.record_types {
            RecordType::from_str(name).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::Invalid(
                "query_timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The configured record types, parsed. `validate` guarantees these parse.
    pub fn parsed_record_types(&self) -> Vec<RecordType> {
        self.record_types
            .iter()
            .filter_map(|name| RecordType::from_str(name).ok())
            .collect()
    }
}

fn default_dns_server() -> String {
    "8.8.8.8".to_string()
}

fn default_record_types() -> Vec<String> {
    RecordType::all()
        .iter()
        .map(|record_type| record_type.as_str().to_string())
        .collect()
}

fn default_query_timeout() -> u64 {
    2000
}
