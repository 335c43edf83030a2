pub mod config;
pub mod logging;

pub use config::{load_config, report_config_source};
pub use logging::init_logging;
