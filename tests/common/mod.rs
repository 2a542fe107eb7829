#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::audio::AudioPlayer;
use space_invaders::compute::init_state;
use space_invaders::config::GameConfig;
use space_invaders::entities::{GameState, GameStatus, Rgb};
use space_invaders::geometry::{Point, Rect};
use space_invaders::layout::Layout;
use space_invaders::render::{FontSize, Renderer, Sprite};

/// One drawing call, as seen by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Rect(Rect, Rgb),
    Sprite(Sprite, Rect),
    Text(String, Point, FontSize),
    Polygon(Vec<Point>),
    Present,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub ops: Vec<Op>,
    pub not_ready: HashSet<Sprite>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self, which: Sprite) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Sprite(s, _) if *s == which))
            .count()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(r, _) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, FontSize)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _, f) => Some((t.clone(), *f)),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Polygon(_)))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> std::io::Result<()> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> std::io::Result<()> {
        self.ops.push(Op::Rect(rect, color));
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()> {
        self.ops.push(Op::Sprite(sprite, rect));
        Ok(())
    }

    fn sprite_ready(&self, sprite: Sprite) -> bool {
        !self.not_ready.contains(&sprite)
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: FontSize,
        _color: Rgb,
    ) -> std::io::Result<()> {
        self.ops.push(Op::Text(text.to_string(), at, font));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], _color: Rgb) -> std::io::Result<()> {
        self.ops.push(Op::Polygon(points.to_vec()));
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.ops.push(Op::Present);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCmd {
    Play,
    Pause,
    Rewind,
}

#[derive(Default)]
pub struct RecordingAudio {
    pub log: Vec<AudioCmd>,
}

impl AudioPlayer for RecordingAudio {
    fn play(&mut self) {
        self.log.push(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.log.push(AudioCmd::Pause);
    }

    fn rewind(&mut self) {
        self.log.push(AudioCmd::Rewind);
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// 400 × 600 canvas: tiles are 400/24 × 600/16.
pub fn layout_400() -> Layout {
    Layout::fit(400.0, &GameConfig::default())
}

/// A running game on the 400px canvas with the default first wave.
pub fn running_state() -> GameState {
    let mut s = init_state(&layout_400(), &GameConfig::default());
    s.status = GameStatus::Running;
    s
}

pub fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "expected {} ≈ {}", a, b);
}
