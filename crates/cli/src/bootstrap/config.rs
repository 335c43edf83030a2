use dnsprobe_domain::{Config, ConfigSource};
use std::path::Path;
use tracing::{info, warn};

pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    let (config, source) = Config::load_or_default(path)?;
    Ok((config, source))
}

/// Called after `init_logging`; the config loads before logging is up, so
/// the fallback warning is deferred until there is somewhere to put it.
pub fn report_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => {
            info!(config_file = %path.display(), "Configuration loaded")
        }
        ConfigSource::Defaults(reason) => {
            warn!(%reason, "config file not usable, using built-in defaults")
        }
    }
}
