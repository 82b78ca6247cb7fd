use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Settings for one seat at the table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    /// Player name; prompted for on startup when unset.
    pub name: Option<String>,
    /// Disk color. The first character is drawn on the board.
    pub color: String,
}

impl PlayerConfig {
    fn with_color(color: &str) -> Self {
        PlayerConfig {
            name: None,
            color: color.to_string(),
        }
    }

    /// Build the player, taking `name` when the config leaves it unset.
    pub fn to_player(&self, name: impl Into<String>) -> Player {
        match &self.name {
            Some(configured) => Player::new(configured.clone(), self.color.clone()),
            None => Player::new(name, self.color.clone()),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first: PlayerConfig::with_color("Red"),
            second: PlayerConfig::with_color("Yellow"),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("first", &self.first), ("second", &self.second)] {
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.color must not be empty"
                )));
            }
            if matches!(&player.name, Some(name) if name.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "{seat}.name must not be empty when set"
                )));
            }
        }
        if self.first.color == self.second.color {
            return Err(ConfigError::Validation(
                "first.color and second.color must differ".into(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation("log.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
