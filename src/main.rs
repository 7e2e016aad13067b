//! Terminal runner (default binary).
//!
//! Renders the board, collects one move per tick and feeds it to the session
//! controller until the game ends or the player closes it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

use blockfall::core::{Game, GameConfig, GameSnapshot};
use blockfall::input::InputProcessor;
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{Move, Status, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, TICK_MS};

/// A falling-block puzzle game for the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,

    /// Seed for the shape sequence (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Milliseconds between automatic falls
    #[arg(long, default_value_t = FALL_INTERVAL_MS as u64)]
    fall_ms: u64,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_dimensions(self.width, self.height)
            .with_fall_interval(Duration::from_millis(self.fall_ms));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;

    let mut game = Game::new(args.config())?;
    info!(
        "starting {}x{} game, fall interval {}ms",
        args.width, args.height, args.fall_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!("Final score: {}", game.score());
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut input = InputProcessor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !game.is_running() {
            break;
        }

        // Input with timeout until next tick.
        let tick_input = input.next_move(tick)?;
        if tick_input.resized {
            term.invalidate();
        }
        game.update(tick_input.mv);
    }

    // Leave the final board on screen until the player closes it.
    while game.status() == Status::GameOver {
        let tick_input = input.next_move(tick)?;
        if tick_input.resized {
            term.invalidate();
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }
        if tick_input.mv == Move::Closed {
            game.update(Move::Closed);
        }
    }

    Ok(())
}
