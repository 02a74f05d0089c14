//! Configuration file management for persistent settings.
//!
//! Stores user preferences in ~/.grove/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_max_depth() -> usize {
    5
}

/// User configuration that persists between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether new nodes are inserted as the first child instead of the last
    #[serde(default)]
    pub add_as_first_child: bool,
    /// Deepest level a node may occupy, counting roots as level 1
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            add_as_first_child: false,
            max_depth: default_max_depth(),
        }
    }
}

impl Config {
    /// Get the config directory path (~/.grove)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".grove"))
    }

    /// Get the config file path (~/.grove/config.json)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir()
            .ok_or_else(|| "Could not determine home directory".to_string())?;

        // Create config directory if it doesn't exist
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let path = Self::config_path()
            .ok_or_else(|| "Could not determine config path".to_string())?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&path, json)
            .map_err(|e| format!("Failed to write config: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.add_as_first_child);
        assert_eq!(config.max_depth, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            add_as_first_child: true,
            max_depth: 3,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert!(parsed.add_as_first_child);
        assert_eq!(parsed.max_depth, 3);
    }

    #[test]
    fn test_config_missing_fields_fall_back() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(!parsed.add_as_first_child);
        assert_eq!(parsed.max_depth, 5);
    }
}
