//! Pieces module - the fixed shape catalog and the active piece.
//!
//! Each kind is a small square grid whose nonzero cells all carry the kind's
//! color index. Shapes live in fixed stack storage (at most 4x4), so spawning
//! and rotating never touch the heap.

use crate::matrix::rotate_square;
use crate::types::{Cell, PieceKind, RotateDir, EMPTY, MAX_PIECE_SIDE};

const SHAPE_CAPACITY: usize = MAX_PIECE_SIDE * MAX_PIECE_SIDE;

/// A square piece grid of side 2-4, stored row-major with stride `side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    side: u8,
    cells: [Cell; SHAPE_CAPACITY],
}

impl Shape {
    fn from_rows(kind: PieceKind, rows: &[&[Cell]]) -> Self {
        let side = rows.len().min(MAX_PIECE_SIDE);
        let mut cells = [EMPTY; SHAPE_CAPACITY];
        for (y, row) in rows.iter().take(side).enumerate() {
            for (x, &cell) in row.iter().take(side).enumerate() {
                cells[y * side + x] = cell;
            }
        }
        Self {
            kind,
            side: side as u8,
            cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length (shape width and height).
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// The `side * side` cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.side() * self.side()]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        let side = self.side();
        if x >= side || y >= side {
            return None;
        }
        Some(self.cells[y * side + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells().chunks_exact(self.side().max(1))
    }

    /// Nonzero cells as `(x, y, value)` in shape-local coordinates.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let side = self.side().max(1);
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != EMPTY)
            .map(move |(i, &c)| (i % side, i / side, c))
    }

    /// Rotate by 90° in place.
    pub fn rotate(&mut self, dir: RotateDir) {
        let side = self.side();
        rotate_square(&mut self.cells, side, dir);
    }
}

/// Build the spawn shape for a piece kind.
///
/// ```
/// use tui_blocks_core::pieces::create_piece;
/// use tui_blocks_core::types::PieceKind;
///
/// let o = create_piece(PieceKind::O);
/// assert_eq!(o.side(), 2);
/// assert_eq!(o.cells(), &[2, 2, 2, 2]);
/// ```
pub fn create_piece(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_rows(kind, &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
        PieceKind::O => Shape::from_rows(kind, &[&[2, 2], &[2, 2]]),
        PieceKind::L => Shape::from_rows(kind, &[&[0, 3, 0], &[0, 3, 0], &[0, 3, 3]]),
        PieceKind::J => Shape::from_rows(kind, &[&[0, 4, 0], &[0, 4, 0], &[4, 4, 0]]),
        PieceKind::I => Shape::from_rows(
            kind,
            &[&[0, 5, 0, 0], &[0, 5, 0, 0], &[0, 5, 0, 0], &[0, 5, 0, 0]],
        ),
        PieceKind::S => Shape::from_rows(kind, &[&[0, 6, 6], &[6, 6, 0], &[0, 0, 0]]),
        PieceKind::Z => Shape::from_rows(kind, &[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
    }
}

/// Look a shape up by its letter. Unknown names yield no shape.
pub fn create_piece_named(name: &str) -> Option<Shape> {
    PieceKind::from_str(name).map(create_piece)
}

/// The falling piece: a shape plus its offset into board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    pub fn new(shape: Shape, x: i16, y: i16) -> Self {
        Self { shape, x, y }
    }

    /// Place a fresh `kind` at the top of a board `board_width` cells wide,
    /// centered with integer floor on both widths.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = create_piece(kind);
        let x = (board_width / 2) as i16 - (shape.side() / 2) as i16;
        Self { shape, x, y: 0 }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    /// Nonzero cells as `(x, y, value)` in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        self.shape
            .filled()
            .map(move |(x, y, c)| (self.x + x as i16, self.y + y as i16, c))
    }
}
