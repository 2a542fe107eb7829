/// Runtime-tunable game configuration.
///
/// Every field defaults to the matching value in [`crate::constants`], so a
/// TOML file only needs the keys it wants to change:
///
/// ```toml
/// initial_velocity = 2.0
/// star_count = 40
/// ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Board ────────────────────────────────────────────────────────────────
    pub board_columns: u32,
    pub board_rows: u32,
    pub max_canvas_width: f32,
    pub aspect_ratio: f32,

    // ── Waves ────────────────────────────────────────────────────────────────
    pub initial_rows: u32,
    pub initial_columns: u32,
    pub initial_velocity: f32,
    pub spacing_factor: f32,
    pub points_per_enemy: u32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_speed: f32,

    // ── Background ───────────────────────────────────────────────────────────
    pub star_count: usize,
    pub star_speed: f32,
    pub explosion_particles: usize,

    // ── Host ─────────────────────────────────────────────────────────────────
    pub frame_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_columns: BOARD_COLUMNS,
            board_rows: BOARD_ROWS,
            max_canvas_width: MAX_CANVAS_WIDTH,
            aspect_ratio: ASPECT_RATIO,
            initial_rows: INITIAL_ENEMY_ROWS,
            initial_columns: INITIAL_ENEMY_COLUMNS,
            initial_velocity: INITIAL_ENEMY_VELOCITY,
            spacing_factor: ENEMY_SPACING_FACTOR,
            points_per_enemy: POINTS_PER_ENEMY,
            projectile_speed: PROJECTILE_SPEED,
            star_count: STAR_COUNT,
            star_speed: STAR_SPEED,
            explosion_particles: EXPLOSION_PARTICLES,
            frame_millis: FRAME_MILLIS,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the wave arithmetic or the layout cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The wave caps are `board_columns / 2 - 5` and `board_rows - 9`.
        if self.board_columns < 12 {
            return invalid("board_columns", "at least 12");
        }
        if self.board_rows < 10 {
            return invalid("board_rows", "at least 10");
        }
        if !(self.max_canvas_width > 0.0) {
            return invalid("max_canvas_width", "a positive width");
        }
        if !(self.aspect_ratio > 0.0) {
            return invalid("aspect_ratio", "a positive ratio");
        }
        if self.initial_rows == 0 || self.initial_columns == 0 {
            return invalid("initial_rows/initial_columns", "at least 1");
        }
        if !(self.initial_velocity.abs() > 0.0) {
            return invalid("initial_velocity", "a non-zero speed");
        }
        if !(self.spacing_factor >= 1.0) {
            return invalid("spacing_factor", "1.0 or more");
        }
        if !(self.projectile_speed > 0.0) {
            return invalid("projectile_speed", "a positive speed");
        }
        if !(self.star_speed >= 0.0) {
            return invalid("star_speed", "zero or more");
        }
        if self.frame_millis == 0 {
            return invalid("frame_millis", "at least 1");
        }
        Ok(())
    }

    /// Widest enemy grid a wave may grow to.  Never below one column, even
    /// for boards `validate` would reject.
    pub fn max_wave_columns(&self) -> u32 {
        (self.board_columns / 2).saturating_sub(5).max(1)
    }

    /// Tallest enemy grid a wave may grow to; at least one row.
    pub fn max_wave_rows(&self) -> u32 {
        self.board_rows.saturating_sub(9).max(1)
    }
}

fn invalid(field: &'static str, expected: &'static str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid { field, expected })
}
