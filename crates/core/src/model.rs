//! Board model - the mutable game state
//!
//! Ties the grid, the piece catalog and the randomizer together. A single
//! active piece falls one row per [`BoardModel::tick`]; when it can no longer
//! move down it is merged into the grid ("lock"), full rows are removed
//! ("melt"), and the next piece spawns at the top.
//!
//! Every operation is total: failures are reported as `false` (or an empty
//! result), never as errors or panics. Once the game is over, movement and
//! ticks do nothing.

use log::{debug, info};

use crate::board::{Board, ClearedRows};
use crate::config::GridSize;
use crate::pieces::{rotation_count, shape_for, ShapeMask};
use crate::rng::{KindRandomizer, UniformRandomizer};
use crate::types::{Direction, GameStatus, PieceKind, SPAWN_X, SPAWN_Y};

/// Kind sitting in the look-ahead slot of a fresh model.
pub const INITIAL_NEXT_KIND: PieceKind = PieceKind::Z;

/// Anchor and rotation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i8,
    pub y: i8,
    pub rotation: usize,
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub placement: Placement,
}

impl ActivePiece {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            placement: Placement {
                x: SPAWN_X,
                y: SPAWN_Y,
                rotation: 0,
            },
        }
    }

    pub fn shape(&self) -> &'static ShapeMask {
        shape_for(self.kind, self.placement.rotation)
    }
}

/// What a single [`BoardModel::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece fell one row.
    Moved,
    /// The piece locked, `cleared` rows melted, and the next piece spawned.
    Locked { cleared: ClearedRows, game_over: bool },
    /// Nothing happened (game already over).
    Idle,
}

#[derive(Debug, Clone)]
pub struct BoardModel<K = UniformRandomizer> {
    board: Board,
    randomizer: K,
    active: ActivePiece,
    previous: Placement,
    next: PieceKind,
    status: GameStatus,
    piece_count: u32,
    rows_completed: u32,
}

impl<K: KindRandomizer> BoardModel<K> {
    /// Create an empty board and spawn the first piece.
    pub fn new(size: GridSize, randomizer: K) -> Self {
        let active = ActivePiece::spawn(INITIAL_NEXT_KIND);
        let mut model = Self {
            board: Board::new(size),
            randomizer,
            active,
            previous: active.placement,
            next: INITIAL_NEXT_KIND,
            status: GameStatus::Running,
            piece_count: 0,
            rows_completed: 0,
        };
        model.spawn_next();
        model
    }

    /// Promote the queued kind to the active piece at the spawn anchor and
    /// draw a new queued kind.
    ///
    /// No collision check happens here; an overlapping spawn is caught by the
    /// game-over check of the next lock.
    pub fn spawn_next(&mut self) {
        self.piece_count = self.piece_count.wrapping_add(1);
        self.active = ActivePiece::spawn(self.next);
        self.previous = self.active.placement;
        self.next = self.randomizer.next_kind();
        if self.status == GameStatus::PieceLocking {
            self.status = GameStatus::Running;
        }
        debug!(
            "spawn #{}: {} (next {})",
            self.piece_count,
            self.active.kind.as_str(),
            self.next.as_str()
        );
    }

    /// Shift the active piece one cell. Returns false if blocked or the game is over.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.previous = self.active.placement;

        let (dx, dy) = direction.offset();
        let Placement { x, y, rotation } = self.active.placement;
        let (nx, ny) = (x.saturating_add(dx), y.saturating_add(dy));
        if self.collides(nx, ny, rotation) {
            return false;
        }
        self.active.placement.x = nx;
        self.active.placement.y = ny;
        true
    }

    /// Advance to the next rotation state in place.
    ///
    /// There is no wall kick: if the rotated shape collides at the current
    /// anchor, nothing changes and false is returned.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.previous = self.active.placement;

        let Placement { x, y, rotation } = self.active.placement;
        let next = (rotation + 1) % rotation_count(self.active.kind);
        if self.collides(x, y, next) {
            return false;
        }
        self.active.placement.rotation = next;
        true
    }

    /// Drop the active piece straight down as far as it fits and return the
    /// number of rows it fell. The piece does not lock; the next tick does that.
    ///
    /// Afterwards [`previous`](Self::previous) is the placement the drop started from.
    pub fn hard_drop(&mut self) -> u8 {
        if self.is_game_over() {
            return 0;
        }
        let start = self.active.placement;
        let mut fallen = 0;
        while self.move_piece(Direction::Down) {
            fallen += 1;
        }
        self.previous = start;
        fallen
    }

    /// Move the active piece to column `x` in `rotation` (wrapping) without
    /// changing its row. Returns false, leaving it in place, on collision.
    pub fn steer(&mut self, x: i8, rotation: usize) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.previous = self.active.placement;

        let rotation = rotation % rotation_count(self.active.kind);
        if self.collides(x, self.active.placement.y, rotation) {
            return false;
        }
        self.active.placement.x = x;
        self.active.placement.rotation = rotation;
        true
    }

    /// One gravity step: fall one row, or lock, melt and spawn if landed.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }
        if self.move_piece(Direction::Down) {
            return TickOutcome::Moved;
        }

        self.status = GameStatus::PieceLocking;
        self.lock();
        let cleared = self.clear_rows();
        self.spawn_next();
        TickOutcome::Locked {
            cleared,
            game_over: self.is_game_over(),
        }
    }

    /// Merge the active piece into the grid. Ends the game if row 0 becomes occupied.
    pub fn lock(&mut self) {
        let Placement { x, y, .. } = self.active.placement;
        self.board.merge(self.active.shape(), x, y);
        debug!(
            "lock {} at ({}, {}) rotation {}",
            self.active.kind.as_str(),
            x,
            y,
            self.active.placement.rotation
        );

        if self.board.row(0).unwrap_or(0) != 0 {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} pieces, {} rows",
                self.piece_count, self.rows_completed
            );
        }
    }

    /// Remove completed rows, returning their indices in discovery order.
    pub fn clear_rows(&mut self) -> ClearedRows {
        let cleared = self.board.clear_full_rows();
        for y in &cleared {
            debug!("melt row {}", y);
        }
        self.rows_completed = self.rows_completed.wrapping_add(cleared.len() as u32);
        cleared
    }

    /// Whether the active kind at `rotation` would collide with its anchor at `(x, y)`.
    /// `rotation` wraps.
    pub fn collides(&self, x: i8, y: i8, rotation: usize) -> bool {
        self.board
            .collides(shape_for(self.active.kind, rotation), x, y)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn active_shape(&self) -> &'static ShapeMask {
        self.active.shape()
    }

    /// Placement before the last move/rotate attempt; renderers erase here.
    pub fn previous(&self) -> Placement {
        self.previous
    }

    pub fn previous_shape(&self) -> &'static ShapeMask {
        shape_for(self.active.kind, self.previous.rotation)
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Pieces spawned so far, including the active one.
    pub fn piece_count(&self) -> u32 {
        self.piece_count
    }

    /// Rows melted over the whole game.
    pub fn rows_completed(&self) -> u32 {
        self.rows_completed
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn height(&self) -> u8 {
        self.board.height()
    }
}

impl BoardModel<UniformRandomizer> {
    /// Default 10x20 board with a seeded uniform randomizer.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GridSize::default(), UniformRandomizer::seeded(seed))
    }
}
