/// The game session: state machine, intent queue, scheduling and audio.
///
/// `Game` owns the gameplay `GameState` and the decorative `Background`, and
/// is the only thing that replaces them.  Hosts feed it input events and
/// commands, and call [`Game::frame`] once per display refresh.
///
/// ```text
/// NotStarted ──start──▶ Running ◀──toggle_pause──▶ Paused
///                          │
///                    enemy reaches ship
///                          ▼
///                      GameOver ──replay──▶ Running
/// ```

use rand::Rng;

use crate::audio::AudioPlayer;
use crate::background::Background;
use crate::compute::{init_state, new_game, resize, tick, toggle_pause};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::input::{FireTrigger, InputAdapter, InputEvent, IntentQueue};
use crate::layout::Layout;
use crate::render::Renderer;
use crate::scheduler::Ticker;

/// Which screen the host should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Playing,
    Paused,
    GameOver { score: u32 },
}

pub struct Game<A: AudioPlayer, G: Rng> {
    config: GameConfig,
    layout: Layout,
    state: GameState,
    background: Background,
    input: InputAdapter,
    intents: IntentQueue,
    ticker: Ticker,
    audio: A,
    rng: G,
}

impl<A: AudioPlayer, G: Rng> Game<A, G> {
    /// A game waiting on the welcome screen, sized for `available_width`.
    pub fn new(config: GameConfig, available_width: f32, audio: A, mut rng: G) -> Self {
        let layout = Layout::fit(available_width, &config);
        let state = init_state(&layout, &config);
        let mut background = Background::new(config.star_speed);
        background.init_stars(layout.width, layout.height, config.star_count, &mut rng);
        Game {
            config,
            layout,
            state,
            background,
            input: InputAdapter::default(),
            intents: IntentQueue::new(),
            ticker: Ticker::new(),
            audio,
            rng,
        }
    }

    pub fn set_fire_trigger(&mut self, trigger: FireTrigger) {
        self.input = InputAdapter::new(trigger);
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn screen(&self) -> Screen {
        match self.state.status {
            GameStatus::NotStarted => Screen::Welcome,
            GameStatus::Running => Screen::Playing,
            GameStatus::Paused => Screen::Paused,
            GameStatus::GameOver => Screen::GameOver {
                score: self.state.score,
            },
        }
    }

    /// Whether the next call to [`Game::frame`] will run a tick.
    pub fn tick_pending(&self) -> bool {
        self.ticker.is_requested() && self.state.status == GameStatus::Running
    }

    /// Intents waiting for the next tick.
    pub fn queued_intents(&self) -> usize {
        self.intents.len()
    }

    // ── Commands ──────────────────────────────────────────────────────────────

    /// Leave the welcome screen and begin the first wave.
    pub fn start(&mut self) {
        if self.state.status != GameStatus::NotStarted {
            return;
        }
        self.begin();
        self.audio.play();
        log::info!("game started");
    }

    /// Pause a running game or resume a paused one.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Running => {
                self.state = toggle_pause(&self.state);
                self.ticker.cancel();
                self.audio.pause();
                log::info!("paused at score {}", self.state.score);
            }
            GameStatus::Paused => {
                self.state = toggle_pause(&self.state);
                self.ticker.request();
                self.audio.play();
                log::info!("resumed");
            }
            GameStatus::NotStarted | GameStatus::GameOver => {}
        }
    }

    /// Start over after a game over.
    pub fn replay(&mut self) {
        if self.state.status != GameStatus::GameOver {
            return;
        }
        self.begin();
        self.audio.rewind();
        self.audio.play();
        log::info!("replay");
    }

    fn begin(&mut self) {
        self.state = new_game(&self.state, &self.config);
        self.background.particles.clear();
        self.input.reset();
        self.intents.clear();
        self.ticker.request();
    }

    /// The host's available width changed.
    pub fn resize(&mut self, available_width: f32) {
        let layout = Layout::fit(available_width, &self.config);
        if layout == self.layout {
            return;
        }
        log::debug!(
            "resize: canvas {}x{} (tile {}x{})",
            layout.width,
            layout.height,
            layout.tile_width,
            layout.tile_height
        );
        self.layout = layout;
        self.state = resize(&self.state, &layout, &self.config);
        self.background.init_stars(
            layout.width,
            layout.height,
            self.config.star_count,
            &mut self.rng,
        );
    }

    /// Feed one raw input event.  Intents only queue while the game runs;
    /// touch tracking is kept up to date regardless.
    pub fn handle_input(&mut self, event: InputEvent) {
        let intent = self
            .input
            .translate(event, &self.state.ship, self.state.height);
        if let Some(intent) = intent {
            if self.state.status == GameStatus::Running {
                self.intents.push(intent);
            }
        }
    }

    // ── Frame ─────────────────────────────────────────────────────────────────

    /// Run the pending tick, if any, drawing it to `out`.  Returns whether a
    /// tick ran.  A tick that ends the game does not request a successor.
    pub fn frame<R: Renderer>(&mut self, out: &mut R) -> std::io::Result<bool> {
        if !self.ticker.take() {
            return Ok(false);
        }
        if self.state.status != GameStatus::Running {
            return Ok(false);
        }

        let intents = self.intents.drain();
        let next = tick(
            &self.state,
            &intents,
            &mut self.background,
            &self.config,
            out,
            &mut self.rng,
        )?;
        self.state = next;

        if self.state.status == GameStatus::GameOver {
            self.audio.pause();
            self.audio.rewind();
            log::info!("game over with score {}", self.state.score);
        } else {
            self.ticker.request();
        }
        Ok(true)
    }
}
