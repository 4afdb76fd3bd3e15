use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the stored board document inside the data directory.
pub const BOARD_FILE_NAME: &str = "tasklane.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overrides the default board file location when set.
    #[serde(default)]
    pub board_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/tasklane/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("tasklane").join("config.toml"))
        }
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or malformed. Config problems are never fatal.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                    tracing::warn!(
                        "Ignoring malformed config at {}",
                        config_path.display()
                    );
                }
            }
        }
        Self::default()
    }

    /// Resolve where the board document lives: the configured override,
    /// or `tasklane.json` in the platform data directory.
    pub fn effective_board_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.board_path {
            return Some(path.clone());
        }
        dirs::data_dir().map(|data| data.join("tasklane").join(BOARD_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_path_override_wins() {
        let config = AppConfig {
            board_path: Some(PathBuf::from("/tmp/custom-board.json")),
        };
        assert_eq!(
            config.effective_board_path(),
            Some(PathBuf::from("/tmp/custom-board.json"))
        );
    }

    #[test]
    fn test_default_board_path_uses_data_dir() {
        let config = AppConfig::default();
        if let Some(path) = config.effective_board_path() {
            assert!(path.ends_with(format!("tasklane/{BOARD_FILE_NAME}")));
        }
    }

    #[test]
    fn test_config_parses_toml() {
        let config: AppConfig = toml::from_str("board_path = \"/srv/board.json\"").unwrap();
        assert_eq!(config.board_path, Some(PathBuf::from("/srv/board.json")));
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.board_path.is_none());
    }
}
