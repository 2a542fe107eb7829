/// Input adapter: turns device events into normalized intents.
///
/// Keyboard and touch both end up as the same small set of [`Intent`]s.
/// Intents are queued and the game loop drains the queue once per tick, so
/// the order in which they take effect is deterministic.

use std::collections::VecDeque;

use crate::entities::Ship;

/// Keys the game cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Space,
    Other,
}

/// A raw event from the input source, in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32 },
    TouchEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
    /// Horizontal drag by this many pixels (negative = left).
    Drag(f32),
}

/// Which edge of the fire key shoots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireTrigger {
    /// Shoot when the key is released.
    KeyUp,
    /// Shoot when the key is pressed; for sources that never report releases.
    KeyDown,
}

#[derive(Debug)]
pub struct InputAdapter {
    fire_trigger: FireTrigger,
    /// Fire key went down since the last shot; a release only fires then.
    fire_held: bool,
    /// Last known touch x while a finger is down.
    touch_x: Option<f32>,
}

impl Default for InputAdapter {
    fn default() -> Self {
        InputAdapter::new(FireTrigger::KeyUp)
    }
}

impl InputAdapter {
    pub fn new(fire_trigger: FireTrigger) -> Self {
        InputAdapter {
            fire_trigger,
            fire_held: false,
            touch_x: None,
        }
    }

    /// Forget any key or touch in progress, so a release that belongs to a
    /// press from before the reset does nothing.
    pub fn reset(&mut self) {
        self.fire_held = false;
        self.touch_x = None;
    }

    /// Translate one event.  `ship` and `canvas_height` decide whether a tap
    /// counts as a shot (it must land in the band of rows the ship occupies).
    pub fn translate(
        &mut self,
        event: InputEvent,
        ship: &Ship,
        canvas_height: f32,
    ) -> Option<Intent> {
        match event {
            InputEvent::KeyDown(Key::Left | Key::A) => Some(Intent::MoveLeft),
            InputEvent::KeyDown(Key::Right | Key::D) => Some(Intent::MoveRight),
            InputEvent::KeyDown(Key::Space) => match self.fire_trigger {
                FireTrigger::KeyDown => Some(Intent::Fire),
                FireTrigger::KeyUp => {
                    self.fire_held = true;
                    None
                }
            },
            InputEvent::KeyUp(Key::Space) if self.fire_trigger == FireTrigger::KeyUp => {
                std::mem::take(&mut self.fire_held).then_some(Intent::Fire)
            }
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => None,
            InputEvent::TouchStart { x, y } => {
                self.touch_x = Some(x);
                if y > canvas_height - ship.height {
                    Some(Intent::Fire)
                } else {
                    None
                }
            }
            InputEvent::TouchMove { x } => {
                let previous = self.touch_x?;
                self.touch_x = Some(x);
                Some(Intent::Drag(x - previous))
            }
            InputEvent::TouchEnd => {
                self.touch_x = None;
                None
            }
        }
    }
}

/// FIFO of intents waiting for the next tick.
#[derive(Clone, Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    /// Take every queued intent, oldest first.
    pub fn drain(&mut self) -> Vec<Intent> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
