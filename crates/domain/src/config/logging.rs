use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (default: "info")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory the rotating log files are written to
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Filename prefix of the rotated log files
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Rotated files kept on disk before the oldest is deleted
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_directory(),
            file_prefix: default_file_prefix(),
            max_log_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_directory() -> String {
    "logs".to_string()
}

fn default_file_prefix() -> String {
    "dnsprobe.log".to_string()
}

fn default_max_log_files() -> usize {
    3
}
