use crate::consts;
use crate::game::{Grid, Settings};
use crate::theme::Theme;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Theme to start the game with
    pub(crate) theme: Theme,

    /// Grid dimensions, snake length, & obstacle count
    pub(crate) settings: Settings,

    /// Time between movements of the snake
    pub(crate) tick_period: Duration,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the settings are unplayable.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            theme: Theme::default(),
            settings: Settings::default(),
            tick_period: Duration::from_millis(consts::DEFAULT_TICK_MILLIS),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    theme: Theme,
    grid: RawGridConfig,
    game: RawGameConfig,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGridConfig {
    columns: u16,
    rows: u16,
    cell_size: u16,
}

impl Default for RawGridConfig {
    fn default() -> RawGridConfig {
        RawGridConfig {
            columns: consts::DEFAULT_COLUMNS,
            rows: consts::DEFAULT_ROWS,
            cell_size: consts::DEFAULT_CELL_SIZE,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    initial_length: usize,
    obstacles: usize,
    tick_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            initial_length: consts::DEFAULT_INITIAL_LENGTH,
            obstacles: consts::DEFAULT_OBSTACLES,
            tick_ms: consts::DEFAULT_TICK_MILLIS,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfigError;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfigError> {
        let RawConfig { theme, grid, game } = value;
        let grid = Grid::new(grid.cell_size, grid.columns, grid.rows)
            .ok_or(InvalidConfigError::ZeroDimension)?;
        if game.initial_length == 0 {
            return Err(InvalidConfigError::NoSnake);
        }
        let columns = usize::from(grid.columns());
        if game.initial_length > columns {
            return Err(InvalidConfigError::SnakeTooLong {
                length: game.initial_length,
                columns,
            });
        }
        if game.tick_ms == 0 {
            return Err(InvalidConfigError::ZeroTick);
        }
        // Snake + food + obstacles + the free cells ahead of the snake
        let clearance = consts::FORWARD_CLEARANCE.min(columns - game.initial_length);
        let needed = game
            .initial_length
            .saturating_add(1)
            .saturating_add(game.obstacles)
            .saturating_add(clearance);
        if needed > grid.cell_count() {
            return Err(InvalidConfigError::TooCrowded {
                needed,
                cells: grid.cell_count(),
            });
        }
        Ok(Config {
            theme,
            settings: Settings {
                grid,
                initial_length: game.initial_length,
                obstacles: game.obstacles,
            },
            tick_period: Duration::from_millis(game.tick_ms),
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum InvalidConfigError {
    #[error("grid columns, rows, and cell-size must all be nonzero")]
    ZeroDimension,
    #[error("initial-length must be at least 1")]
    NoSnake,
    #[error("initial-length {length} does not fit in {columns} columns")]
    SnakeTooLong { length: usize, columns: usize },
    #[error("tick-ms must be nonzero")]
    ZeroTick,
    #[error("snake, food, and obstacles need {needed} cells, but the grid only has {cells}")]
    TooCrowded { needed: usize, cells: usize },
}
