//! Game tuning loaded from an optional JSON file.
//!
//! Every field falls back to the value in [`crate::constants`], so a config
//! file only needs to name the values it overrides.

use crate::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{name} is out of range: {value}")]
    InvalidValue { name: &'static str, value: f64 },
    #[error("tick rate must be between 1 and {max}, got {rate}")]
    InvalidTickRate { rate: u32, max: u32 },
    #[error("pipe count must be at least 1")]
    InvalidPipeCount,
    #[error(
        "no room for pipe gaps: field height {field_height} - gap {gap} - 2 x min height {min_height} must be positive"
    )]
    EmptyGapRange {
        field_height: f64,
        gap: f64,
        min_height: f64,
    },
}

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub ticks_per_second: u32,

    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub flap_velocity: f64,

    pub pipe_count: usize,
    pub pipe_width: f64,
    /// Height of one pipe sprite; only affects drawing.
    pub pipe_sprite_height: f64,
    pub pipe_gap: f64,
    pub pipe_min_height: f64,
    pub pipe_spacing: f64,
    pub pipe_speed: f64,

    /// Far layer speed; the near layer scrolls twice as fast.
    pub background_speed: f64,
    pub near_layer_height: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            pipe_count: PIPE_COUNT,
            pipe_width: PIPE_WIDTH,
            pipe_sprite_height: PIPE_SPRITE_HEIGHT,
            pipe_gap: PIPE_GAP,
            pipe_min_height: PIPE_MIN_HEIGHT,
            pipe_spacing: PIPE_SPACING,
            pipe_speed: PIPE_SPEED,
            background_speed: BACKGROUND_SPEED,
            near_layer_height: NEAR_LAYER_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Load the config from `path`, or from the platform config directory.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// means built-in defaults. The result is always validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    log::info!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_sprite_height", self.pipe_sprite_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_speed", self.pipe_speed),
            ("background_speed", self.background_speed),
            ("near_layer_height", self.near_layer_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        let finite = [
            ("gravity", self.gravity),
            ("flap_velocity", self.flap_velocity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        if !(self.pipe_min_height.is_finite() && self.pipe_min_height >= 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "pipe_min_height",
                value: self.pipe_min_height,
            });
        }
        if !(0.0..=self.field_width).contains(&self.bird_x) {
            return Err(ConfigError::InvalidValue {
                name: "bird_x",
                value: self.bird_x,
            });
        }

        if self.ticks_per_second == 0 || self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(ConfigError::InvalidTickRate {
                rate: self.ticks_per_second,
                max: MAX_TICKS_PER_SECOND,
            });
        }
        if self.pipe_count == 0 {
            return Err(ConfigError::InvalidPipeCount);
        }

        self.gap_top_range().map(|_| ())
    }

    /// Whole-pixel range the top of a pipe gap is drawn from.
    ///
    /// Fails when the field is too short to fit the gap plus a minimum
    /// pipe length above and below it, or when no whole pixel fits.
    pub fn gap_top_range(&self) -> Result<RangeInclusive<i64>, ConfigError> {
        let room = self.field_height - self.pipe_gap - 2.0 * self.pipe_min_height;
        let low = self.pipe_min_height.ceil();
        let high = (self.field_height - self.pipe_gap - self.pipe_min_height).floor();
        if !(room > 0.0 && low.is_finite() && high.is_finite() && low <= high) {
            return Err(ConfigError::EmptyGapRange {
                field_height: self.field_height,
                gap: self.pipe_gap,
                min_height: self.pipe_min_height,
            });
        }
        Ok(low as i64..=high as i64)
    }

    /// Length of one simulation tick.
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }
}

/// Location of the default config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flappy").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
