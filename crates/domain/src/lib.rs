//! Dnsprobe Domain Layer
pub mod config;
pub mod errors;
pub mod query;
pub mod record_type;
pub mod validators;

pub use config::{Config, ConfigError, ConfigSource, LoggingConfig};
pub use errors::{LookupError, ValidationError};
pub use query::{QueryAnswer, QueryRequest};
pub use record_type::RecordType;
