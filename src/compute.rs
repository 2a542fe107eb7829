/// Game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` and returns a brand-new `GameState`.  `tick` additionally
/// draws through the injected renderer and drives the decorative
/// `Background`; its only source of randomness is the injected RNG.

use rand::Rng;

use crate::background::Background;
use crate::config::GameConfig;
use crate::entities::{
    GameState, GameStatus, WaveState, PROJECTILE_COLOR, SCORE_COLOR,
};
use crate::geometry::{intersects, Bounds, Point};
use crate::input::Intent;
use crate::layout::{projectile_from, Layout};
use crate::render::{FontSize, Renderer, Sprite};
use crate::wave::{advance_wave, build_wave, initial_wave};

/// Where the score is printed (baseline origin, canvas pixels).
const SCORE_POSITION: Point = Point { x: 15.0, y: 35.0 };

// ── Constructors ─────────────────────────────────────────────────────────────

/// A game that has not started yet: first wave laid out, ship centred.
pub fn init_state(layout: &Layout, config: &GameConfig) -> GameState {
    let wave = initial_wave(config);
    let (enemies, alive) = build_wave(
        wave.rows,
        wave.columns,
        layout.enemy_size(),
        config.spacing_factor,
    );
    GameState {
        ship: layout.ship(),
        enemies,
        projectiles: Vec::new(),
        wave: WaveState { alive, ..wave },
        score: 0,
        status: GameStatus::NotStarted,
        width: layout.width,
        height: layout.height,
        tile_width: layout.tile_width,
        tile_height: layout.tile_height,
    }
}

/// Fresh, running game on the same canvas: score 0, first wave, no
/// projectiles.  Used both for the first start and for replays.
pub fn new_game(state: &GameState, config: &GameConfig) -> GameState {
    GameState {
        status: GameStatus::Running,
        ..init_state(&layout_of(state), config)
    }
}

/// Fit the game to a new canvas.  The ship is re-centred and the current
/// wave's grid is rebuilt at the new tile size; score and status survive.
pub fn resize(state: &GameState, layout: &Layout, config: &GameConfig) -> GameState {
    let (enemies, alive) = build_wave(
        state.wave.rows,
        state.wave.columns,
        layout.enemy_size(),
        config.spacing_factor,
    );
    GameState {
        ship: layout.ship(),
        enemies,
        projectiles: Vec::new(),
        wave: WaveState {
            alive,
            ..state.wave.clone()
        },
        width: layout.width,
        height: layout.height,
        tile_width: layout.tile_width,
        tile_height: layout.tile_height,
        ..state.clone()
    }
}

/// `Running` ⇄ `Paused`.  Any other status is left untouched.
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        other => other,
    };
    GameState {
        status,
        ..state.clone()
    }
}

fn layout_of(state: &GameState) -> Layout {
    Layout {
        width: state.width,
        height: state.height,
        tile_width: state.tile_width,
        tile_height: state.tile_height,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_ship_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    apply_intent(&mut next, Intent::MoveLeft);
    next
}

pub fn move_ship_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    apply_intent(&mut next, Intent::MoveRight);
    next
}

/// Slide the ship by `dx` pixels, clamped to the canvas.
pub fn drag_ship(state: &GameState, dx: f32) -> GameState {
    let mut next = state.clone();
    apply_intent(&mut next, Intent::Drag(dx));
    next
}

/// Launch one projectile from the ship's nose.
pub fn fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    apply_intent(&mut next, Intent::Fire);
    next
}

fn apply_intent(state: &mut GameState, intent: Intent) {
    let max_x = (state.width - state.ship.width).max(0.0);
    let ship = &mut state.ship;
    match intent {
        Intent::MoveLeft => ship.x = (ship.x - ship.step).clamp(0.0, max_x),
        Intent::MoveRight => ship.x = (ship.x + ship.step).clamp(0.0, max_x),
        Intent::Drag(dx) => ship.x = (ship.x + dx).clamp(0.0, max_x),
        Intent::Fire => {
            let projectile = projectile_from(ship, state.tile_width, state.tile_height);
            state.projectiles.push(projectile);
        }
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the game by one frame and draw it.
///
/// `intents` are applied first, oldest first.  A state that is not
/// `Running` is returned unchanged and nothing is drawn.  If an enemy reaches
/// the ship's row the returned state is `GameOver` and the rest of the frame
/// is skipped.
pub fn tick<R: Renderer>(
    state: &GameState,
    intents: &[Intent],
    background: &mut Background,
    config: &GameConfig,
    out: &mut R,
    rng: &mut impl Rng,
) -> std::io::Result<GameState> {
    if state.status != GameStatus::Running {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    for &intent in intents {
        apply_intent(&mut next, intent);
    }

    // ── 1. Clear ─────────────────────────────────────────────────────────────
    out.clear()?;

    // ── 2. Star field ────────────────────────────────────────────────────────
    background.advance_stars(next.width, next.height, rng);
    background.render_stars(out, rng)?;

    // ── 3. Ship ──────────────────────────────────────────────────────────────
    if out.sprite_ready(Sprite::Ship) {
        out.draw_sprite(Sprite::Ship, next.ship.bounds())?;
    }

    // ── 4. Move enemies, noting border hits and invasion ─────────────────────
    let enemy_ready = out.sprite_ready(Sprite::Enemy);
    let mut border_hit = false;
    let mut invaded = false;
    for enemy in next.enemies.iter_mut().filter(|e| e.alive) {
        enemy.x += next.wave.velocity;
        if enemy.x + enemy.width >= next.width || enemy.x <= 0.0 {
            border_hit = true;
        }
        if enemy_ready {
            out.draw_sprite(Sprite::Enemy, enemy.bounds())?;
        }
        if enemy.y >= next.ship.y {
            invaded = true;
            break;
        }
    }
    if invaded {
        next.status = GameStatus::GameOver;
        out.present()?;
        return Ok(next);
    }

    // ── 5. One reversal + descent per frame, however many enemies hit ───────
    if border_hit {
        next.wave.velocity = -next.wave.velocity;
        for enemy in &mut next.enemies {
            enemy.y += enemy.height;
        }
    }

    // ── 6. Projectiles ↔ enemies ─────────────────────────────────────────────
    for projectile in next.projectiles.iter_mut() {
        projectile.y -= config.projectile_speed;
        out.fill_rect(projectile.bounds(), PROJECTILE_COLOR)?;
        if projectile.used {
            continue;
        }

        let hit = next
            .enemies
            .iter_mut()
            .find(|e| e.alive && intersects(&*projectile, &**e));
        if let Some(enemy) = hit {
            projectile.used = true;
            enemy.alive = false;
            next.wave.alive = next.wave.alive.saturating_sub(1);
            next.score += config.points_per_enemy;
            let center = enemy.bounds().center();
            background.spawn_explosion(center.x, center.y, config.explosion_particles, rng);
        }
    }

    // ── 7. Drop spent projectiles from the front ─────────────────────────────
    let spent = next
        .projectiles
        .iter()
        .take_while(|p| p.used || p.y < 0.0)
        .count();
    next.projectiles.drain(..spent);

    // ── 8. Wave cleared → next wave ──────────────────────────────────────────
    if next.wave.alive == 0 {
        let wave = advance_wave(&next.wave, config);
        let (enemies, alive) = build_wave(
            wave.rows,
            wave.columns,
            (next.tile_width, next.tile_height),
            config.spacing_factor,
        );
        log::debug!(
            "wave cleared: next wave {}x{} at speed {}",
            wave.rows,
            wave.columns,
            wave.velocity.abs()
        );
        next.enemies = enemies;
        next.wave = WaveState { alive, ..wave };
        next.projectiles.clear();
    }

    // ── 9. Score ─────────────────────────────────────────────────────────────
    out.fill_text(
        &next.score.to_string(),
        SCORE_POSITION,
        FontSize::for_canvas_width(next.width),
        SCORE_COLOR,
    )?;

    // ── 10. Explosions ───────────────────────────────────────────────────────
    background.advance_particles(out)?;

    out.present()?;
    Ok(next)
}
