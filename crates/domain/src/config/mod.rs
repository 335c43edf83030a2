//! Configuration module for dnsprobe
//!
//! - `root`: main configuration, loading and fallback policy
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{Config, ConfigSource, DEFAULT_CONFIG_PATH};
