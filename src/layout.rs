/// Canvas sizing: how big the playfield is and how big everything on it is.
///
/// The layout is recomputed whenever the host reports a new available width;
/// the game then resizes the ship and enemies from it.

use crate::config::GameConfig;
use crate::entities::{Projectile, Ship};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub tile_width: f32,
    pub tile_height: f32,
}

impl Layout {
    /// Fit the canvas into `available_width`, capped at the configured
    /// maximum, keeping the configured aspect ratio.
    pub fn fit(available_width: f32, config: &GameConfig) -> Self {
        let width = available_width.min(config.max_canvas_width).max(0.0);
        let height = width * config.aspect_ratio;
        Layout {
            width,
            height,
            tile_width: width / config.board_columns as f32,
            tile_height: height / config.board_rows as f32,
        }
    }

    /// Ship centred horizontally, two tiles above the bottom edge.
    pub fn ship(&self) -> Ship {
        Ship {
            x: self.width / 2.0 - self.tile_width,
            y: self.height - self.tile_height * 2.0,
            width: self.tile_width * 2.0,
            height: self.tile_height * 2.0,
            step: self.tile_width,
        }
    }

    /// Enemies occupy exactly one tile.
    pub fn enemy_size(&self) -> (f32, f32) {
        (self.tile_width, self.tile_height)
    }
}

/// Projectile launched from the ship's nose.
pub fn projectile_from(ship: &Ship, tile_width: f32, tile_height: f32) -> Projectile {
    Projectile {
        x: ship.x + ship.width * 15.0 / 32.0,
        y: ship.y,
        width: tile_width / 8.0,
        height: tile_height / 3.0,
        used: false,
    }
}
