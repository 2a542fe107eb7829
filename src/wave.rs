/// Enemy grids and wave-to-wave difficulty scaling.

use crate::config::GameConfig;
use crate::entities::{Enemy, WaveState};

/// The first wave of a new game.
pub fn initial_wave(config: &GameConfig) -> WaveState {
    WaveState {
        rows: config.initial_rows,
        columns: config.initial_columns,
        velocity: config.initial_velocity,
        alive: 0,
    }
}

/// Lay out `rows * columns` live enemies, column by column.
///
/// The grid starts one enemy in from the top-left corner.  Columns are
/// `width * spacing_factor` apart; rows are stacked with no gap.  Returns the
/// enemies together with their count.
pub fn build_wave(
    rows: u32,
    columns: u32,
    enemy_size: (f32, f32),
    spacing_factor: f32,
) -> (Vec<Enemy>, usize) {
    let (width, height) = enemy_size;
    let mut enemies = Vec::with_capacity((rows * columns) as usize);
    for c in 0..columns {
        for r in 0..rows {
            enemies.push(Enemy {
                x: width + c as f32 * width * spacing_factor,
                y: height + r as f32 * height,
                width,
                height,
                alive: true,
            });
        }
    }
    let count = enemies.len();
    (enemies, count)
}

/// Parameters of the wave that follows `current`: one more row and column
/// (each capped by the board size) and one unit faster in the same direction.
///
/// The returned wave has no live enemies; the caller rebuilds the grid and
/// clears the projectiles.
pub fn advance_wave(current: &WaveState, config: &GameConfig) -> WaveState {
    let speed = current.velocity.abs() + 1.0;
    WaveState {
        rows: (current.rows + 1).min(config.max_wave_rows()),
        columns: (current.columns + 1).min(config.max_wave_columns()),
        velocity: if current.velocity < 0.0 { -speed } else { speed },
        alive: 0,
    }
}
