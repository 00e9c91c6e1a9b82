use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub board: BoardConfig,
    pub moves: MovesConfig,
    pub logging: LoggingConfig,
}

/// Where the game record comes from when none is given on the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Empty means the sample game bundled with the binary
    pub path: String,
}

/// Board rendering options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub show_notation: bool,
    pub unicode_pieces: bool,
    pub flipped: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            show_notation: true,
            unicode_pieces: true,
            flipped: false,
        }
    }
}

/// Move list behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovesConfig {
    pub smooth_scroll: bool,
    /// Rows kept between the current move and the pane edge when scrolling
    pub scroll_padding: usize,
}

impl Default for MovesConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            scroll_padding: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn record_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found.
    ///
    /// The flag is true when a default file was just written, so the caller
    /// can report it once logging is up.
    pub fn load() -> Result<(Self, bool)> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, bool)> {
        if !config_path.exists() {
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok((config, true));
        }

        let contents = fs::read_to_string(config_path)?;
        Ok((Self::parse(&contents)?, false))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Returns the path of the log file
    pub fn log_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().join("replay.log"))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "replay")
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.board.show_notation);
        assert!(config.moves.smooth_scroll);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [board]
            flipped = true

            [moves]
            scroll_padding = 2
            "#,
        )
        .unwrap();
        assert!(config.board.flipped);
        assert!(config.board.unicode_pieces);
        assert_eq!(config.moves.scroll_padding, 2);
        assert!(config.moves.smooth_scroll);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = Config::default();
        config.game.path = "/tmp/game.json".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_creates_default_once() {
        let dir = std::env::temp_dir().join(format!("replay-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let (config, created) = Config::load_from(&path).unwrap();
        assert!(created);
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let (again, created) = Config::load_from(&path).unwrap();
        assert!(!created);
        assert_eq!(again, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_record_path_ignores_blank() {
        let mut game = GameConfig::default();
        assert_eq!(game.record_path(), None);
        game.path = "  ".to_string();
        assert_eq!(game.record_path(), None);
        game.path = "games/one.json".to_string();
        assert_eq!(game.record_path(), Some(PathBuf::from("games/one.json")));
    }
}
