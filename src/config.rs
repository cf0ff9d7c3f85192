// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub decision: DecisionConfig,
    pub debug: DebugConfig,
}

/// Static metadata returned from GET /
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Move selection tuning
#[derive(Debug, Deserialize, Clone)]
pub struct DecisionConfig {
    /// Extra room required beyond our length before a food move is eligible
    pub space_margin: usize,
    /// Whether the tolerant fallback may path through danger cells
    pub tolerant_accepts_danger: bool,
    /// Optional display string returned with every move
    #[serde(default)]
    pub shout: Option<String>,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "Frostflight".to_string(),
                color: "#80d9ff".to_string(),
                head: "evil".to_string(),
                tail: "bolt".to_string(),
            },
            decision: DecisionConfig {
                space_margin: 0,
                tolerant_accepts_danger: true,
                shout: None,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.decision.space_margin, 0);
        assert!(config.decision.tolerant_accepts_danger);
        assert_eq!(config.appearance.color, "#80d9ff");
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        // This test ensures Snake.toml is valid and can be parsed
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        // Appearance
        assert_eq!(file_config.appearance.apiversion, hardcoded_config.appearance.apiversion);
        assert_eq!(file_config.appearance.author, hardcoded_config.appearance.author);
        assert_eq!(file_config.appearance.color, hardcoded_config.appearance.color);
        assert_eq!(file_config.appearance.head, hardcoded_config.appearance.head);
        assert_eq!(file_config.appearance.tail, hardcoded_config.appearance.tail);

        // Decision
        assert_eq!(
            file_config.decision.space_margin,
            hardcoded_config.decision.space_margin
        );
        assert_eq!(
            file_config.decision.tolerant_accepts_danger,
            hardcoded_config.decision.tolerant_accepts_danger
        );
        assert_eq!(file_config.decision.shout, hardcoded_config.decision.shout);

        // Debug
        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_shout_is_optional() {
        let config = Config::from_toml_str(
            r##"
            [appearance]
            apiversion = "1"
            author = "a"
            color = "#000000"
            head = "default"
            tail = "default"

            [decision]
            space_margin = 2
            tolerant_accepts_danger = false

            [debug]
            enabled = true
            log_file_path = "x.jsonl"
            "##,
        )
        .expect("inline config should parse");

        assert_eq!(config.decision.space_margin, 2);
        assert!(!config.decision.tolerant_accepts_danger);
        assert_eq!(config.decision.shout, None);
        assert!(config.debug.enabled);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = Config::from_toml_str("[debug]\nenabled = false\nlog_file_path = \"a\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_works() {
        let config = Config::load_or_default();
        assert_eq!(config.appearance.head, "evil");
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
