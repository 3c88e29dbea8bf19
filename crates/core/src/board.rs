//! Board module - the grid of locked cells.
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward, with
//! row 0 at the top. The board is 12x20 by default.
//!
//! Collision is asymmetric on purpose: cells left of column 0, right of the
//! last column or below the last row collide, but rows above row 0 are open,
//! so tall pieces can spawn and rotate partly above the visible board.

use arrayvec::ArrayVec;

use crate::matrix::Grid;
use crate::pieces::Piece;
use crate::scoring::SweepScore;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_PIECE_SIDE};

/// Largest width or height accepted by [`Board::with_size`].
pub const MAX_BOARD_SIDE: u8 = 64;

/// Smallest width or height accepted by [`Board::with_size`]: room for the
/// widest piece.
pub const MIN_BOARD_SIDE: u8 = MAX_PIECE_SIDE as u8;

/// Result of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sweep {
    /// Row index of each clear, in scan order (bottom-most first). The same
    /// index repeats when adjacent rows clear, since the row above slides
    /// into the slot that was just emptied.
    pub rows: ArrayVec<u8, { MAX_BOARD_SIDE as usize }>,
    /// Points awarded by this sweep.
    pub points: u32,
}

impl Sweep {
    pub fn lines(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// The board of locked cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create a new empty 12x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board; each side is clamped to
    /// `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`.
    pub fn with_size(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_SIDE, MAX_BOARD_SIDE);
        let height = height.clamp(MIN_BOARD_SIDE, MAX_BOARD_SIDE);
        Self {
            grid: Grid::new(width as usize, height as usize),
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Returns `None` for ragged, empty or oversized input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let grid = Grid::from_rows(rows)?;
        let max = MAX_BOARD_SIDE as usize;
        if grid.width() == 0 || grid.height() == 0 || grid.width() > max || grid.height() > max
        {
            return None;
        }
        Some(Self { grid })
    }

    pub fn width(&self) -> u8 {
        self.grid.width() as u8
    }

    pub fn height(&self) -> u8 {
        self.grid.height() as u8
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid.get(x as usize, y as usize)
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.grid.set(x as usize, y as usize, cell)
    }

    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Whether a single board coordinate blocks a piece cell.
    #[inline(always)]
    fn blocks(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width() as i16 || y >= self.height() as i16 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.is_occupied(x, y)
    }

    /// Check whether any filled cell of `piece` is out of bounds or overlaps
    /// a locked cell.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y, _)| self.blocks(x, y))
    }

    /// Copy every filled cell of `piece` into the board, overwriting.
    ///
    /// Callers merge only positions that passed [`Board::collides`]. Cells
    /// above row 0 are dropped. Returns the number of cells written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y, cell) in piece.cells() {
            if self.set(x, y, cell) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.grid
            .row(y)
            .is_some_and(|row| row.iter().all(|&c| c != EMPTY))
    }

    /// Clear complete rows and score them.
    ///
    /// Rows are scanned bottom to top. A complete row is removed, an empty
    /// row enters at the top, and the same index is examined again before
    /// moving up.
    pub fn sweep(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        let mut score = SweepScore::new();

        let mut y = self.grid.height();
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.grid.remove_row(row);
                sweep.rows.push(row as u8);
                score.award_row();
                continue;
            }
            y -= 1;
        }

        sweep.points = score.points();
        sweep
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.grid.fill(EMPTY);
    }

    pub fn is_empty(&self) -> bool {
        self.grid.cells().iter().all(|&c| c == EMPTY)
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Copy into a fixed-size grid (for snapshots). Cells outside either
    /// grid are skipped.
    pub fn write_u8_grid<const W: usize, const H: usize>(&self, out: &mut [[u8; W]; H]) {
        for (y, out_row) in out.iter_mut().enumerate() {
            match self.grid.row(y) {
                Some(row) => {
                    for (x, cell) in out_row.iter_mut().enumerate() {
                        *cell = row.get(x).copied().unwrap_or(EMPTY);
                    }
                }
                None => out_row.fill(EMPTY),
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
