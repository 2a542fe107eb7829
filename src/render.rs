/// The drawing surface the game renders onto.
///
/// The core never owns the surface; it issues drawing calls in canvas pixel
/// coordinates and the host decides how they end up on screen.

use crate::entities::Rgb;
use crate::geometry::{Point, Rect};

/// Images the game draws.  A host may load them lazily.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ship,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    /// 16px, canvases up to 400px wide.
    Small,
    /// 18px, anything wider.
    Medium,
}

impl FontSize {
    /// Score font for a canvas of the given width.
    pub fn for_canvas_width(width: f32) -> Self {
        if width <= 400.0 {
            FontSize::Small
        } else {
            FontSize::Medium
        }
    }

    pub fn pixels(self) -> u16 {
        match self {
            FontSize::Small => 16,
            FontSize::Medium => 18,
        }
    }
}

pub trait Renderer {
    /// Erase the whole surface.
    fn clear(&mut self) -> std::io::Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> std::io::Result<()>;

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()>;

    /// Whether `sprite` has finished loading.  Sprites that are not ready
    /// are skipped for the frame.
    fn sprite_ready(&self, _sprite: Sprite) -> bool {
        true
    }

    /// Draw `text` with its baseline starting at `at`.
    fn fill_text(&mut self, text: &str, at: Point, font: FontSize, color: Rgb)
        -> std::io::Result<()>;

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> std::io::Result<()>;

    /// Called once the frame is complete.
    fn present(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
