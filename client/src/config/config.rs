use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeSettings;
use serde::{Deserialize, Serialize};

use super::UiConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    let path = path.unwrap_or_else(get_default_config_path);
    ConfigManager::new(FileContentConfigProvider::new(path), YamlConfigSerializer::new())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            tictactoe: TicTacToeSettings {
                computer_move_delay_ms: 100,
                reset_delay_ms: 500,
            },
            ui: UiConfig {
                use_colors: false,
                show_cell_numbers: true,
            },
        };

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.set_config(&config).is_ok());

        let reloaded = get_config_manager(Some(file_path.clone())).get_config();
        assert_eq!(reloaded, Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("ui:\n  use_colors: false\n  show_cell_numbers: false\n")
            .unwrap();

        let loaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(loaded.tictactoe, TicTacToeSettings::default());
        assert!(!loaded.ui.use_colors);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("tictactoe:\n  computer_move_delay_ms: 600\n  reset_delay_ms: 999999\n")
            .unwrap();

        let result = get_config_manager(Some(file_path.clone())).get_config();
        assert!(result.is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
