//! # Configuration Management Module
//!
//! Startup settings for a quest: where the player starts, how many coins
//! they carry, which word list and map to load, and how to log.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zodiacquest::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Write the defaults, then read them back
//!     Config::create_default("zodiacquest.toml")?;
//!     let config = Config::load("zodiacquest.toml")?;
//!
//!     println!("Start region: {}", config.game.start_region);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! start_region = "A"
//! starting_coins = 15
//! valid_things_path = "data/9C.txt"
//! # map_path = "data/seeds/map.json"
//!
//! [logging]
//! level = "info"
//! # file = "zodiacquest.log"
//! ```
//!
//! Every field is optional; missing values fall back to the defaults above.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::quest::state::{REQUIRED_START_REGION, STARTING_COINS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Long name or short code of the region every quest starts in.
    #[serde(default = "default_start_region")]
    pub start_region: String,
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u32,
    /// Word list of strings recognised as valid things, one per line.
    #[serde(default = "default_valid_things_path")]
    pub valid_things_path: String,
    /// JSON map replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_path: Option<String>,
}

fn default_start_region() -> String {
    REQUIRED_START_REGION.to_string()
}

fn default_starting_coins() -> u32 {
    STARTING_COINS
}

fn default_valid_things_path() -> String {
    "data/9C.txt".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_region: default_start_region(),
            starting_coins: default_starting_coins(),
            valid_things_path: default_valid_things_path(),
            map_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.start_region.trim().is_empty() {
            return Err(anyhow!("game.start_region must not be empty"));
        }
        Ok(())
    }
}
