//! Terminal tetromino runner (default binary).
//!
//! Key presses and gravity ticks are queued as commands and dispatched one at
//! a time; every state change is redrawn through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_tetromino::config::GameConfig;
use tui_tetromino::core::{Game, Outcome, Renderer, ShapeSource, UniformShapes};
use tui_tetromino::input::{CommandQueue, Controls, GravityClock};
use tui_tetromino::logging;
use tui_tetromino::term::{GameView, TerminalRenderer};

type DynGame = Game<Box<dyn ShapeSource>>;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    let log_path = config
        .log_path
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let controls = Controls::from_bindings(&config.keys)?;
    let mut game = Game::with_options(shape_source(&config)?, config.game_options());
    info!(
        "session start: tick {}ms, row clearing {}",
        config.tick_ms, config.clear_full_rows
    );

    let mut term = TerminalRenderer::new(GameView::default());
    term.enter()?;

    let result = run(&mut game, &mut term, &controls, config.tick_ms);

    // Always try to restore the terminal.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {err:#}");
    }
    info!("session end: {} pieces locked", game.pieces_locked());
    result
}

fn shape_source(config: &GameConfig) -> Result<Box<dyn ShapeSource>> {
    if let Some(scripted) = config.scripted_shapes()? {
        info!("scripted pieces {:?}", config.pieces);
        return Ok(Box::new(scripted));
    }
    let seed = match config.seed {
        0 => clock_seed(),
        seed => seed,
    };
    info!("uniform pieces, seed {seed}");
    Ok(Box::new(UniformShapes::new(seed)))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
        .max(1)
}

fn run(
    game: &mut DynGame,
    term: &mut TerminalRenderer,
    controls: &Controls,
    tick_ms: u32,
) -> Result<()> {
    let mut clock = GravityClock::new(tick_ms);
    let mut queue = CommandQueue::new();
    let mut last = Instant::now();

    term.render(&game.snapshot())?;

    loop {
        let timeout = Duration::from_millis(clock.until_next_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if controls.should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = controls.command_for(key) {
                        queue.push(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    term.render(&game.snapshot())?;
                }
                _ => {}
            }
        }

        // Advance by whole milliseconds so fractions carry into the next pass.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        queue.push_ticks(clock.advance(elapsed_ms));

        while let Some(command) = queue.pop() {
            if game.dispatch(command, term)? == Outcome::Restarted {
                clock.reset();
            }
        }
    }
}
