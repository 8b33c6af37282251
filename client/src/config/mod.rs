mod config;
mod logging_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{Config, get_config_manager};
pub use logging_config::LoggingConfig;
