/// All game entity types: plain data, no game logic.

use crate::geometry::{Bounds, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// 24-bit colour handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const STAR_COLOR: Rgb = Rgb(102, 51, 153); // RebeccaPurple
pub const EXPLOSION_COLOR: Rgb = Rgb(147, 112, 219);
pub const PROJECTILE_COLOR: Rgb = Rgb(255, 255, 255);
pub const SCORE_COLOR: Rgb = Rgb(255, 255, 255);

// ── Ship & enemy ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal distance of one keyboard move (one tile).
    pub step: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once the projectile has destroyed an enemy; it never hits again.
    pub used: bool,
}

// ── Decoration ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Edge length of the square drawn for this particle.
    pub size: f32,
    /// Ticks left before the particle disappears.
    pub life: f32,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

impl Bounds for Ship {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounds for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Wave ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct WaveState {
    pub rows: u32,
    pub columns: u32,
    /// Shared horizontal enemy velocity; the sign is the current direction.
    pub velocity: f32,
    /// Enemies of this wave still alive.
    pub alive: usize,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the gameplay tick reads and writes.  Cloneable so the tick can
/// return a new snapshot without mutating the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    /// Oldest first; cleanup removes from the front.
    pub projectiles: Vec<Projectile>,
    pub wave: WaveState,
    pub score: u32,
    pub status: GameStatus,
    /// Canvas size in pixels.
    pub width: f32,
    pub height: f32,
    /// Tile size the ship, enemies and projectiles are derived from.
    pub tile_width: f32,
    pub tile_height: f32,
}
