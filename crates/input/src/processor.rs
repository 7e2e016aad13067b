//! Per-tick input collection.
//!
//! Every pending terminal event is drained once per tick and reduced to a
//! single [`Move`]: a close request wins, then the most recent fresh key
//! press, then the most recent auto-repeat. Key releases are ignored.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::Move;

/// Reduce the key events of one tick to a single move.
pub fn resolve_moves(keys: &[KeyEvent]) -> Move {
    let mut pressed = None;
    let mut repeated = None;

    for key in keys {
        let Some(mv) = map_key(*key) else {
            continue;
        };
        match key.kind {
            KeyEventKind::Press => {
                if mv == Move::Closed {
                    return Move::Closed;
                }
                pressed = Some(mv);
            }
            KeyEventKind::Repeat => {
                if mv == Move::Closed {
                    return Move::Closed;
                }
                repeated = Some(mv);
            }
            KeyEventKind::Release => {}
        }
    }

    pressed.or(repeated).unwrap_or(Move::NoMove)
}

/// Result of one input poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub mv: Move,
    /// The terminal was resized since the previous poll
    pub resized: bool,
}

/// Collects crossterm events between ticks.
#[derive(Debug, Default)]
pub struct InputProcessor {
    keys: Vec<KeyEvent>,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for input, draining every pending event, and
    /// resolve them to one move.
    pub fn next_move(&mut self, timeout: Duration) -> io::Result<TickInput> {
        self.keys.clear();
        let mut resized = false;
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => self.keys.push(key),
                Event::Resize(_, _) => resized = true,
                _ => {}
            }
        }

        Ok(TickInput {
            mv: resolve_moves(&self.keys),
            resized,
        })
    }
}
