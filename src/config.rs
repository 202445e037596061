use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::Player;
use crate::logging::LoggingConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
    pub logging: LoggingConfig,
}

/// Session settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who moves first in every new game
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: Player::One,
        }
    }
}

/// Display names and piece colors.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one_name: String,
    pub two_name: String,
    pub one_color: String,
    pub two_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one_name: "Player 1".to_string(),
            two_name: "Player 2".to_string(),
            one_color: "red".to_string(),
            two_color: "yellow".to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one_name,
            Player::Two => &self.two_name,
        }
    }

    /// Piece color for `player`. Falls back to white for an unparseable name;
    /// `AppConfig::validate` rejects those up front.
    pub fn color(&self, player: Player) -> Color {
        let raw = match player {
            Player::One => &self.one_color,
            Player::Two => &self.two_color,
        };
        Color::from_str(raw).unwrap_or(Color::White)
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.one_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one_name must not be empty".into(),
            ));
        }
        if self.players.two_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two_name must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("players.one_color", &self.players.one_color),
            ("players.two_color", &self.players.two_color),
        ] {
            if Color::from_str(value).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key} '{value}' is not a recognised color"
                )));
            }
        }
        if self.players.one_color.eq_ignore_ascii_case(&self.players.two_color) {
            return Err(ConfigError::Validation(
                "players.one_color and players.two_color must differ".into(),
            ));
        }

        self.logging.validate()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| ConfigError::Validation(format!("default config failed to serialize: {e}")))
    }
}
