/// Decorative star field and explosion particles.
///
/// Nothing here feeds back into gameplay.  All randomness comes through the
/// injected `rng` so tests can seed it.

use std::f32::consts::PI;

use rand::Rng;

use crate::entities::{Particle, Star, EXPLOSION_COLOR, STAR_COLOR};
use crate::geometry::{star_outline, Point, Rect};
use crate::render::Renderer;

#[derive(Clone, Debug, Default)]
pub struct Background {
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
    /// Slowest fall speed; each star gets a random bonus in [0, 1).
    pub star_speed: f32,
}

impl Background {
    pub fn new(star_speed: f32) -> Self {
        Background {
            stars: Vec::new(),
            particles: Vec::new(),
            star_speed,
        }
    }

    // ── Stars ─────────────────────────────────────────────────────────────────

    /// Replace the star field with `count` stars scattered over the canvas.
    pub fn init_stars(&mut self, width: f32, height: f32, count: usize, rng: &mut impl Rng) {
        self.stars.clear();
        for _ in 0..count {
            let star = Star {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * height,
                size: random_star_size(rng),
                speed: self.star_speed + rng.gen::<f32>(),
            };
            self.stars.push(star);
        }
    }

    /// Let every star fall; stars past the bottom edge reappear at the top
    /// with a new column, size and speed.
    pub fn advance_stars(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > height {
                star.y = 0.0;
                star.x = rng.gen::<f32>() * width;
                star.size = random_star_size(rng);
                star.speed = self.star_speed + rng.gen::<f32>();
            }
        }
    }

    /// Draw every star as a 5-pointed shape.  The rotation is re-rolled on
    /// each call, which makes the field twinkle.
    pub fn render_stars<R: Renderer>(
        &self,
        out: &mut R,
        rng: &mut impl Rng,
    ) -> std::io::Result<()> {
        for star in &self.stars {
            let rotation = rng.gen::<f32>() * PI;
            let outline = star_outline(Point { x: star.x, y: star.y }, star.size, rotation);
            out.fill_polygon(&outline, STAR_COLOR)?;
        }
        Ok(())
    }

    // ── Particles ─────────────────────────────────────────────────────────────

    /// Burst of `count` particles flying out of (`x`, `y`).
    pub fn spawn_explosion(&mut self, x: f32, y: f32, count: usize, rng: &mut impl Rng) {
        for _ in 0..count {
            let particle = Particle {
                x,
                y,
                vx: (rng.gen::<f32>() - 0.5) * 6.0,
                vy: (rng.gen::<f32>() - 0.5) * 6.0,
                size: if rng.gen_bool(0.5) { 4.0 } else { 8.0 },
                life: 20.0 + rng.gen::<f32>() * 10.0,
                color: EXPLOSION_COLOR,
            };
            self.particles.push(particle);
        }
    }

    /// Move and age every particle, drop the expired ones, and draw the rest
    /// as filled squares.
    pub fn advance_particles<R: Renderer>(&mut self, out: &mut R) -> std::io::Result<()> {
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= 1.0;
            p.life > 0.0
        });
        for p in &self.particles {
            out.fill_rect(Rect::new(p.x, p.y, p.size, p.size), p.color)?;
        }
        Ok(())
    }
}

fn random_star_size(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>() * 4.0 + 1.0
}
