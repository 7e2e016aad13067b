//! Game module - the session controller
//!
//! Owns the board and the active piece, dispatches one [`Move`] per tick,
//! drives the one-second automatic fall, scores destroyed rows and spawns
//! new pieces. Time and randomness are injected so sessions can be replayed
//! exactly in tests.
//!
//! A failed player `MoveDown` locks the piece at once instead of waiting for
//! the next automatic fall. Pausing freezes the fall timer: after a resume
//! the next automatic fall is a full interval away.

use std::time::Duration;

use log::{debug, info};

use crate::block::Coord;
use crate::board::Board;
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::rng::{seed_from_time, ShapeRng, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Move, Rotation, Status, PIECE_BLOCKS, SPAWN_ROW_OFFSET};

/// One game session
#[derive(Debug, Clone)]
pub struct Game<C = SystemClock, R = SimpleRng> {
    config: GameConfig,
    status: Status,
    board: Board,
    current: Option<Piece>,
    /// Clock reading at the last automatic fall (or lock / resume)
    last_fall: Duration,
    score: u32,
    clock: C,
    rng: R,
}

impl Game<SystemClock, SimpleRng> {
    /// Start a session on the wall clock, seeding from the config or the time
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(seed_from_time);
        Self::with_sources(config, SystemClock::new(), SimpleRng::new(seed))
    }
}

impl<C: Clock, R: ShapeRng> Game<C, R> {
    /// Start a session with an explicit clock and shape source.
    ///
    /// The first piece is spawned immediately.
    pub fn with_sources(config: GameConfig, clock: C, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::with_dimensions(config.width, config.height);
        let last_fall = clock.now();
        let mut game = Self {
            config,
            status: Status::Running,
            board,
            current: None,
            last_fall,
            score: 0,
            clock,
            rng,
        };
        game.spawn_piece();
        Ok(game)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True until the game is over or closed; paused sessions still run
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Advance the session by one tick.
    ///
    /// `Closed` ends the session immediately. Any other move is dispatched,
    /// then the time-gated automatic fall runs.
    pub fn update(&mut self, mv: Move) {
        match mv {
            Move::Closed => {
                if self.status != Status::Closed {
                    info!("session closed with score {}", self.score);
                }
                self.status = Status::Closed;
                return;
            }
            Move::Pause => self.toggle_pause(),
            mv if mv.is_piece_command() => {
                self.apply_move(mv);
            }
            _ => {}
        }

        self.fall_current_piece();
    }

    /// Apply a piece command to the current piece.
    ///
    /// Returns whether the piece moved. Commands are ignored unless the game
    /// is running and unpaused.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        match mv {
            Move::MoveDown => {
                let moved = self.board.move_blocks_down(piece.blocks());
                if !moved {
                    self.last_fall = self.clock.now();
                    self.lock_piece();
                }
                moved
            }
            Move::MoveRight => self.board.move_blocks_right(piece.blocks()),
            Move::MoveLeft => self.board.move_blocks_left(piece.blocks()),
            Move::RotateRight => {
                let state = self.board.rotate_blocks_right(piece.blocks(), piece.state());
                self.store_state(piece.state(), state)
            }
            Move::RotateLeft => {
                let state = self.board.rotate_blocks_left(piece.blocks(), piece.state());
                self.store_state(piece.state(), state)
            }
            Move::Pause | Move::NoMove | Move::Closed => false,
        }
    }

    fn store_state(&mut self, old: Rotation, new: Rotation) -> bool {
        if let Some(piece) = self.current.as_mut() {
            piece.set_state(new);
        }
        new != old
    }

    fn toggle_pause(&mut self) {
        match self.status {
            Status::Running => {
                self.status = Status::Paused;
                debug!("paused");
            }
            Status::Paused => {
                self.status = Status::Running;
                self.last_fall = self.clock.now();
                debug!("resumed");
            }
            Status::GameOver | Status::Closed => {}
        }
    }

    /// Move the piece down once the fall interval has elapsed; lock it if it
    /// has landed. The timer restarts whether or not the piece moved.
    fn fall_current_piece(&mut self) {
        if self.status != Status::Running {
            return;
        }

        let now = self.clock.now();
        if now.saturating_sub(self.last_fall) <= self.config.fall_interval {
            return;
        }
        self.last_fall = now;

        let Some(piece) = self.current else {
            return;
        };
        if !self.board.move_blocks_down(piece.blocks()) {
            self.lock_piece();
        }
    }

    /// Freeze the current piece in place, destroy full rows, score them and
    /// spawn the next piece.
    fn lock_piece(&mut self) {
        self.current = None;

        let rows = self.board.destroy_full_rows();
        if rows > 0 {
            let gained = self.config.score_for(rows);
            self.score = self.score.saturating_add(gained);
            debug!("destroyed {rows} rows, +{gained} (score {})", self.score);
        }

        self.spawn_piece();
    }

    /// Spawn a random shape at the top centre of the board.
    ///
    /// If any spawn cell is taken the game is over.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_shape();
        let px = (self.board.width() / 2) as Coord;
        let py = (self.board.height() - SPAWN_ROW_OFFSET) as Coord;

        match self.board.place_piece(kind, Rotation::Normal, px, py) {
            Some(piece) => {
                debug!("spawned {} at ({px}, {py})", kind.as_str());
                self.current = Some(piece);
                true
            }
            None => {
                info!(
                    "game over: no room to spawn {}, final score {}",
                    kind.as_str(),
                    self.score
                );
                self.current = None;
                self.status = Status::GameOver;
                false
            }
        }
    }

    /// Copy the renderer-facing state into `out`, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let (width, height) = (self.board.width(), self.board.height());
        out.width = width;
        out.height = height;
        out.cells.clear();
        out.cells.reserve(width * height);
        for y in 0..height as Coord {
            for x in 0..width as Coord {
                out.cells.push(self.board.kind_at(x, y));
            }
        }

        out.active = self.current.and_then(|piece| {
            let first = self.board.block(piece.blocks()[0])?;
            let mut cells = [(0, 0); PIECE_BLOCKS];
            for (cell, id) in cells.iter_mut().zip(piece.blocks()) {
                let block = self.board.block(*id)?;
                *cell = (block.x(), block.y());
            }
            Some(ActiveSnapshot {
                kind: first.kind(),
                rotation: piece.state(),
                cells,
            })
        });
        out.score = self.score;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::empty(0, 0);
        self.snapshot_into(&mut s);
        s
    }
}
