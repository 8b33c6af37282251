use common::config::Validate;
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, LoggingConfig, YamlConfigSerializer};

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: TicTacToeSessionSettings,
    /// Fixed RNG seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.logging.validate()?;
        Ok(())
    }
}
