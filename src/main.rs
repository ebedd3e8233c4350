use std::env;
use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;

use crossterm::{cursor, execute, terminal};
use flappy_term::audio::{self, AudioPlayer};
use flappy_term::input::TerminalInput;
use flappy_term::render::TerminalRenderer;
use flappy_term::{FlappyError, FrameDriver, GameConfig, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The terminal belongs to the renderer, so logs only go to the file named
/// by `FLAPPY_LOG`, filtered by `RUST_LOG`.
fn init_logging() -> io::Result<()> {
    let Some(path) = env::var_os("FLAPPY_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(config: GameConfig, audio: Box<dyn AudioPlayer>) -> Result<(), FlappyError> {
    let (cols, rows) = terminal::size()?;
    let renderer = TerminalRenderer::new(
        stdout(),
        cols,
        rows,
        config.screen_width,
        config.screen_height,
    );
    let mut driver = FrameDriver::new(
        config,
        TerminalInput::new(),
        renderer,
        audio,
        SystemClock,
        rand::thread_rng(),
    );
    driver.run()?;
    info!(score = driver.state().score, phase = ?driver.state().phase, "exiting");
    Ok(())
}

fn main() -> Result<(), FlappyError> {
    init_logging()?;

    let config = GameConfig::default();
    config.validate()?;
    let audio = audio::open_default();

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    };

    let result = run(config, audio);
    cleanup(&mut out)?;
    result
}
