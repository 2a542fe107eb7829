mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::audio::SilentAudio;
use space_invaders::config::GameConfig;
use space_invaders::game::{Game, Screen};
use space_invaders::input::{FireTrigger, InputEvent, Key};
use space_invaders::scheduler::FramePacer;

use display::{available_canvas_width, TerminalRenderer, CELL_HEIGHT, CELL_WIDTH};

const CONFIG_ENV: &str = "SPACE_INVADERS_CONFIG";
const CONFIG_FILE: &str = "space_invaders.toml";

type Session = Game<SilentAudio, StdRng>;

// ── Logging & config ──────────────────────────────────────────────────────────

/// Log to a file: anything written to stderr would land on the game screen.
fn init_logging() {
    let path = std::env::temp_dir().join("space_invaders.log");
    let mut builder = env_logger::Builder::from_default_env();
    if let Ok(file) = File::create(&path) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

fn load_config() -> GameConfig {
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(p) => PathBuf::from(p),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if !local.exists() {
                return GameConfig::default();
            }
            local
        }
    };
    match GameConfig::load(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            GameConfig::default()
        }
    }
}

// ── Event translation ─────────────────────────────────────────────────────────

enum Command {
    Start,
    TogglePause,
    Replay,
    Quit,
}

fn key_of(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char('a') | KeyCode::Char('A') => Key::A,
        KeyCode::Char('d') | KeyCode::Char('D') => Key::D,
        KeyCode::Char(' ') => Key::Space,
        _ => Key::Other,
    }
}

fn command_of(code: KeyCode, modifiers: KeyModifiers, screen: Screen) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') if screen == Screen::Welcome => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') if matches!(screen, Screen::GameOver { .. }) => {
            Some(Command::Replay)
        }
        _ => None,
    }
}

/// Terminal cell → canvas pixel (centre of the cell).
fn canvas_point(column: u16, row: u16, origin_col: u16) -> (f32, f32) {
    let x = (column as f32 - origin_col as f32 + 0.5) * CELL_WIDTH;
    let y = (row as f32 + 0.5) * CELL_HEIGHT;
    (x, y)
}

/// The mouse stands in for touch: press = touch start, drag = touch move.
fn touch_of(mouse: MouseEvent, origin_col: u16) -> Option<InputEvent> {
    let (x, y) = canvas_point(mouse.column, mouse.row, origin_col);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::TouchStart { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::TouchMove { x }),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::TouchEnd),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fit the game and the renderer to a terminal of `cols` × `rows`.
fn fit<W: Write>(renderer: &mut TerminalRenderer<W>, game: &mut Session, cols: u16, rows: u16) {
    let aspect = game.config().aspect_ratio;
    game.resize(available_canvas_width(cols, rows, aspect));
    let layout = game.layout();
    renderer.resize(cols, rows, layout.width, layout.height);
}

fn game_loop<W: Write>(
    renderer: &mut TerminalRenderer<W>,
    game: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let pacer = FramePacer::from_millis(game.config().frame_millis);
    let mut shown: Option<Screen> = None;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    if kind == KeyEventKind::Press {
                        match command_of(code, modifiers, game.screen()) {
                            Some(Command::Quit) => return Ok(()),
                            Some(Command::Start) => {
                                game.start();
                                continue;
                            }
                            Some(Command::TogglePause) => game.toggle_pause(),
                            Some(Command::Replay) => game.replay(),
                            None => {}
                        }
                    }
                    let key = key_of(code);
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            game.handle_input(InputEvent::KeyDown(key))
                        }
                        KeyEventKind::Release => game.handle_input(InputEvent::KeyUp(key)),
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(touch) = touch_of(mouse, renderer.origin_col()) {
                        game.handle_input(touch);
                    }
                }
                Event::Resize(cols, rows) => {
                    fit(renderer, game, cols, rows);
                    shown = None;
                }
                _ => {}
            }
        }

        // ── Tick or hold the current screen ───────────────────────────────────
        let ticked = game.frame(renderer)?;
        let screen = game.screen();
        if ticked || shown != Some(screen) {
            renderer.draw_screen(screen)?;
            shown = Some(screen);
        }

        pacer.wait(frame_start);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let config = load_config();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events so Space can fire on release, as a
    // keyboard's keyup would.  Terminals without support fire on press.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let (cols, rows) = terminal::size()?;
    let available = available_canvas_width(cols, rows, config.aspect_ratio);
    let mut game = Game::new(
        config,
        available,
        SilentAudio::new(),
        StdRng::from_entropy(),
    );
    if !keyboard_enhanced {
        game.set_fire_trigger(FireTrigger::KeyDown);
    }
    let layout = game.layout();
    let mut renderer = TerminalRenderer::new(out, cols, rows, layout.width, layout.height);
    log::info!("space invaders starting on a {}x{} terminal", cols, rows);

    let result = game_loop(&mut renderer, &mut game, &rx);

    // Always restore the terminal
    let out = renderer.writer();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
