/// Gameplay and presentation defaults.
///
/// `GameConfig::default()` mirrors these values; a TOML file can override any
/// subset of them at startup.

// ── Board tiling ──────────────────────────────────────────────────────────────

/// Tile columns across the canvas.  Ship and enemy sizes derive from the tile.
pub const BOARD_COLUMNS: u32 = 24;

/// Tile rows down the canvas (3:2 with `BOARD_COLUMNS`).
pub const BOARD_ROWS: u32 = 16;

/// The canvas never grows wider than this, in pixels.
pub const MAX_CANVAS_WIDTH: f32 = 600.0;

/// Canvas height as a multiple of its width.
pub const ASPECT_RATIO: f32 = 1.5;

// ── Waves ─────────────────────────────────────────────────────────────────────

pub const INITIAL_ENEMY_ROWS: u32 = 2;
pub const INITIAL_ENEMY_COLUMNS: u32 = 3;

/// Horizontal enemy speed of the first wave (pixels per tick, positive = right).
pub const INITIAL_ENEMY_VELOCITY: f32 = 1.0;

/// Horizontal gap between enemy columns, as a multiple of the enemy width.
pub const ENEMY_SPACING_FACTOR: f32 = 1.5;

/// Score awarded per enemy destroyed.
pub const POINTS_PER_ENEMY: u32 = 100;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Upward projectile speed (pixels per tick).
pub const PROJECTILE_SPEED: f32 = 10.0;

// ── Background ────────────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 100;

/// Slowest star fall speed; each star adds a random [0, 1) on top.
pub const STAR_SPEED: f32 = 0.5;

pub const EXPLOSION_PARTICLES: usize = 5;

// ── Scheduling ────────────────────────────────────────────────────────────────

/// Frame period of the terminal host (≈60 FPS).
pub const FRAME_MILLIS: u64 = 16;
