/// Rendering layer: all terminal I/O lives here.
///
/// `TerminalRenderer` implements the game's `Renderer` by mapping canvas
/// pixels onto terminal cells.  No game logic is performed; this module only
/// translates drawing calls and screen changes into terminal commands.

use std::f32::consts::PI;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::entities::Rgb;
use space_invaders::game::Screen;
use space_invaders::geometry::{Point, Rect};
use space_invaders::render::{FontSize, Renderer, Sprite};

/// Canvas pixels covered by one terminal cell.
pub const CELL_WIDTH: f32 = 8.0;
pub const CELL_HEIGHT: f32 = 16.0;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;
const C_GAME_OVER: Color = Color::Red;
const C_SCORE: Color = Color::Yellow;

const HINT: &str = "← → / A D : Move   SPACE : Shoot   P : Pause   Q : Quit";

/// Widest canvas (in pixels) that fits a terminal of `cols` × `rows`, one
/// row reserved for the controls hint and one column for each side wall.
pub fn available_canvas_width(cols: u16, rows: u16, aspect_ratio: f32) -> f32 {
    let by_cols = cols.saturating_sub(2) as f32 * CELL_WIDTH;
    let by_rows = rows.saturating_sub(1) as f32 * CELL_HEIGHT / aspect_ratio;
    by_cols.min(by_rows)
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    canvas_width: f32,
    canvas_height: f32,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16, canvas_width: f32, canvas_height: f32) -> Self {
        TerminalRenderer {
            out,
            cols,
            rows,
            canvas_width,
            canvas_height,
        }
    }

    /// Adopt a new terminal size and canvas size.
    pub fn resize(&mut self, cols: u16, rows: u16, canvas_width: f32, canvas_height: f32) {
        self.cols = cols;
        self.rows = rows;
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Canvas size in whole cells.
    fn canvas_cells(&self) -> (u16, u16) {
        (
            (self.canvas_width / CELL_WIDTH).floor() as u16,
            (self.canvas_height / CELL_HEIGHT).floor() as u16,
        )
    }

    /// Terminal column of the canvas's left edge (canvas is centred).
    pub fn origin_col(&self) -> u16 {
        let (w, _) = self.canvas_cells();
        (self.cols.saturating_sub(w) / 2).max(1)
    }

    /// Terminal cell of a canvas point, if it lies on the canvas.
    fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let (w, h) = self.canvas_cells();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let cx = (x / CELL_WIDTH).floor() as u16;
        let cy = (y / CELL_HEIGHT).floor() as u16;
        if cx >= w || cy >= h {
            return None;
        }
        Some((self.origin_col() + cx, cy))
    }

    /// Cells covered by `rect`, clipped to the canvas: (col, row, width, height).
    /// Anything on the canvas covers at least one cell.
    fn cell_span(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let (w, h) = self.canvas_cells();
        let x0 = (rect.x / CELL_WIDTH).floor().max(0.0);
        let y0 = (rect.y / CELL_HEIGHT).floor().max(0.0);
        let x1 = ((rect.x + rect.width) / CELL_WIDTH).ceil().min(w as f32);
        let y1 = ((rect.y + rect.height) / CELL_HEIGHT).ceil().min(h as f32);
        if x0 >= w as f32 || y0 >= h as f32 || x1 <= 0.0 || y1 <= 0.0 {
            return None;
        }
        let cols = (x1 - x0).max(1.0) as u16;
        let rows = (y1 - y0).max(1.0) as u16;
        Some((self.origin_col() + x0 as u16, y0 as u16, cols, rows))
    }

    // ── Walls & hint ──────────────────────────────────────────────────────────

    fn draw_walls(&mut self) -> std::io::Result<()> {
        let (w, h) = self.canvas_cells();
        let left = self.origin_col() - 1;
        let right = self.origin_col() + w;
        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        for row in 0..h.min(self.rows) {
            self.out.queue(cursor::MoveTo(left, row))?;
            self.out.queue(Print("│"))?;
            if right < self.cols {
                self.out.queue(cursor::MoveTo(right, row))?;
                self.out.queue(Print("│"))?;
            }
        }
        Ok(())
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(HINT))?;
        Ok(())
    }

    // ── Screens ───────────────────────────────────────────────────────────────

    /// Overlay for the screens that are not plain gameplay.  Drawn on top
    /// of whatever frame is already on the terminal.
    pub fn draw_screen(&mut self, screen: Screen) -> std::io::Result<()> {
        match screen {
            Screen::Welcome => {
                self.out.queue(terminal::Clear(terminal::ClearType::All))?;
                self.draw_walls()?;
                self.draw_controls_hint()?;
                self.draw_centered(&[
                    ("★  SPACE  INVADERS  ★", C_TITLE),
                    ("", C_HINT),
                    ("Stop the invaders before they land.", Color::White),
                    ("", C_HINT),
                    ("ENTER / SPACE - Play   Q - Quit", Color::White),
                ])?;
            }
            Screen::Paused => {
                self.draw_centered(&[
                    ("╔══════════════════╗", C_TITLE),
                    ("║      PAUSED      ║", C_TITLE),
                    ("╚══════════════════╝", C_TITLE),
                    ("▷  P - Resume", Color::White),
                ])?;
            }
            Screen::GameOver { score } => {
                let score_line = format!("Your score: {}", score);
                self.draw_centered(&[
                    ("╔══════════════════╗", C_GAME_OVER),
                    ("║    GAME  OVER    ║", C_GAME_OVER),
                    ("╚══════════════════╝", C_GAME_OVER),
                    (score_line.as_str(), C_SCORE),
                    ("R - Play Again  Q - Quit", Color::White),
                ])?;
            }
            Screen::Playing => {
                // Pause button, top-right of the canvas.
                let (w, _) = self.canvas_cells();
                let col = (self.origin_col() + w).saturating_sub(3);
                self.out.queue(cursor::MoveTo(col, 0))?;
                self.out.queue(style::SetForegroundColor(C_HINT))?;
                self.out.queue(Print("||"))?;
            }
        }
        self.present()
    }

    fn draw_centered(&mut self, lines: &[(&str, Color)]) -> std::io::Result<()> {
        let (w, h) = self.canvas_cells();
        let cx = self.origin_col() + w / 2;
        let start_row = (h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, (msg, color)) in lines.iter().enumerate() {
            let row = start_row + i as u16;
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(*color))?;
            self.out.queue(Print(*msg))?;
        }
        Ok(())
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

// Sprite art, top row first.  Narrow variants for sprites under three cells.
const SHIP_ART: &[&str] = &["▲", "/█\\"];
const SHIP_ART_NARROW: &[&str] = &["▲", "█"];
const ENEMY_ART: &[&str] = &["«▼»", "╚═╝"];
const ENEMY_ART_NARROW: &[&str] = &["▼"];

fn sprite_art(sprite: Sprite, cols: u16) -> (&'static [&'static str], Color) {
    match (sprite, cols >= 3) {
        (Sprite::Ship, true) => (SHIP_ART, C_SHIP),
        (Sprite::Ship, false) => (SHIP_ART_NARROW, C_SHIP),
        (Sprite::Enemy, true) => (ENEMY_ART, C_ENEMY),
        (Sprite::Enemy, false) => (ENEMY_ART_NARROW, C_ENEMY),
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_walls()?;
        self.draw_controls_hint()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> std::io::Result<()> {
        let Some((col, row, cols, rows)) = self.cell_span(rect) else {
            return Ok(());
        };
        let glyph = if rect.width < CELL_WIDTH / 2.0 {
            "│"
        } else if rect.height < CELL_HEIGHT / 2.0 {
            "▪"
        } else {
            "█"
        };
        let line = glyph.repeat(cols as usize);
        self.out.queue(style::SetForegroundColor(to_color(color)))?;
        for r in row..row + rows {
            self.out.queue(cursor::MoveTo(col, r))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()> {
        let Some((col, row, cols, rows)) = self.cell_span(rect) else {
            return Ok(());
        };
        let (art, color) = sprite_art(sprite, cols);
        self.out.queue(style::SetForegroundColor(color))?;
        for (i, line) in art.iter().take(rows as usize).enumerate() {
            let width = line.chars().count() as u16;
            let lx = col + cols.saturating_sub(width) / 2;
            self.out.queue(cursor::MoveTo(lx, row + i as u16))?;
            self.out.queue(Print(*line))?;
        }
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: FontSize,
        color: Rgb,
    ) -> std::io::Result<()> {
        // `at` is the baseline; the glyphs sit in the cell just above it.
        let Some((col, row)) = self.cell_at(at.x, (at.y - 1.0).max(0.0)) else {
            return Ok(());
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(to_color(color)))?;
        // A cell is CELL_HEIGHT pixels tall; larger fonts are emboldened.
        if f32::from(font.pixels()) > CELL_HEIGHT {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(text))?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> std::io::Result<()> {
        let Some(first) = points.first() else {
            return Ok(());
        };
        let n = points.len() as f32;
        let cx = points.iter().map(|p| p.x).sum::<f32>() / n;
        let cy = points.iter().map(|p| p.y).sum::<f32>() / n;
        let Some((col, row)) = self.cell_at(cx, cy) else {
            return Ok(());
        };

        // Pick a glyph from the outline's size and orientation so a star
        // re-rotated every frame twinkles.
        let dx = first.x - cx;
        let dy = first.y - cy;
        let radius = (dx * dx + dy * dy).sqrt();
        let glyph = if radius < 2.0 {
            "·"
        } else {
            let angle = dx.atan2(-dy).rem_euclid(PI);
            ["✦", "✧", "⋆", "*"][((angle / (PI / 4.0)) as usize).min(3)]
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(to_color(color)))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
