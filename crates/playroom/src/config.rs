//! Difficulty presets, optionally overridden from a TOML file.

use crate::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use playroom_maze::MazeSettings;
use playroom_tictactoe::{Bot, Player, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Bot settings for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize)]
pub struct BotSettings {
    /// Strategy the bot follows.
    strategy: Strategy,
    /// Chance of following the strategy instead of a random square.
    accuracy: f64,
}

impl BotSettings {
    /// Creates bot settings.
    pub fn new(strategy: Strategy, accuracy: f64) -> Self {
        Self { strategy, accuracy }
    }

    /// Builds a bot playing `mark`.
    pub fn bot(&self, mark: Player) -> Bot {
        Bot::new(mark, self.strategy).with_accuracy(self.accuracy)
    }
}

/// Per-difficulty maze presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct MazePresets {
    easy: MazeSettings,
    medium: MazeSettings,
    hard: MazeSettings,
}

impl Default for MazePresets {
    fn default() -> Self {
        Self {
            easy: MazeSettings::new(9, 3),
            medium: MazeSettings::new(13, 5),
            hard: MazeSettings::new(17, 7),
        }
    }
}

/// Per-difficulty bot presets.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize)]
pub struct BotPresets {
    easy: BotSettings,
    medium: BotSettings,
    hard: BotSettings,
}

impl Default for BotPresets {
    fn default() -> Self {
        Self {
            easy: BotSettings::new(Strategy::Random, 1.0),
            medium: BotSettings::new(Strategy::Heuristic, 0.7),
            hard: BotSettings::new(Strategy::Optimal, 1.0),
        }
    }
}

/// All tunable presets.
///
/// In TOML every section and every field is optional; whatever is left
/// out keeps that difficulty's built-in preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(from = "RawConfig")]
pub struct PlayroomConfig {
    /// Maze size and collectible count per difficulty.
    maze: MazePresets,
    /// Bot behaviour per difficulty.
    tictactoe: BotPresets,
}

/// A `[maze.<difficulty>]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MazeOverride {
    size: Option<usize>,
    collectibles: Option<usize>,
}

impl MazeOverride {
    fn apply(self, preset: MazeSettings) -> MazeSettings {
        MazeSettings::new(
            self.size.unwrap_or(*preset.size()),
            self.collectibles.unwrap_or(*preset.collectibles()),
        )
    }
}

/// A `[tictactoe.<difficulty>]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BotOverride {
    strategy: Option<Strategy>,
    accuracy: Option<f64>,
}

impl BotOverride {
    fn apply(self, preset: BotSettings) -> BotSettings {
        BotSettings::new(
            self.strategy.unwrap_or(preset.strategy),
            self.accuracy.unwrap_or(preset.accuracy),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Sections<T> {
    easy: T,
    medium: T,
    hard: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    maze: Sections<MazeOverride>,
    tictactoe: Sections<BotOverride>,
}

impl From<RawConfig> for PlayroomConfig {
    fn from(raw: RawConfig) -> Self {
        let MazePresets { easy, medium, hard } = MazePresets::default();
        let maze = MazePresets {
            easy: raw.maze.easy.apply(easy),
            medium: raw.maze.medium.apply(medium),
            hard: raw.maze.hard.apply(hard),
        };
        let BotPresets { easy, medium, hard } = BotPresets::default();
        let tictactoe = BotPresets {
            easy: raw.tictactoe.easy.apply(easy),
            medium: raw.tictactoe.medium.apply(medium),
            hard: raw.tictactoe.hard.apply(hard),
        };
        Self { maze, tictactoe }
    }
}

impl PlayroomConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the built-in presets.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Maze settings for `difficulty`.
    pub fn maze_for(&self, difficulty: Difficulty) -> MazeSettings {
        match difficulty {
            Difficulty::Easy => self.maze.easy,
            Difficulty::Medium => self.maze.medium,
            Difficulty::Hard => self.maze.hard,
        }
    }

    /// Bot settings for `difficulty`.
    pub fn bot_for(&self, difficulty: Difficulty) -> BotSettings {
        match difficulty {
            Difficulty::Easy => self.tictactoe.easy,
            Difficulty::Medium => self.tictactoe.medium,
            Difficulty::Hard => self.tictactoe.hard,
        }
    }

    /// Rejects unusable maze sizes and accuracies outside 0..=1.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, maze) in [
            ("easy", self.maze.easy),
            ("medium", self.maze.medium),
            ("hard", self.maze.hard),
        ] {
            maze.validate()
                .map_err(|e| ConfigError::new(format!("maze.{}: {}", name, e)))?;
        }
        for (name, bot) in [
            ("easy", self.tictactoe.easy),
            ("medium", self.tictactoe.medium),
            ("hard", self.tictactoe.hard),
        ] {
            if !(0.0..=1.0).contains(&bot.accuracy) {
                return Err(ConfigError::new(format!(
                    "tictactoe.{}: accuracy {} is outside 0..=1",
                    name, bot.accuracy
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
