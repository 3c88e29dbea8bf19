use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_PIECE_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub side: u8,
    pub cells: [[Cell; MAX_PIECE_SIDE]; MAX_PIECE_SIDE],
    pub x: i16,
    pub y: i16,
}

impl ActiveSnapshot {
    /// Filled cells as `(x, y, value)` in board coordinates.
    pub fn board_cells(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        let side = self.side as usize;
        self.cells.iter().take(side).enumerate().flat_map(move |(y, row)| {
            row.iter()
                .take(side)
                .enumerate()
                .filter(|(_, &c)| c != EMPTY)
                .map(move |(x, &c)| (self.x + x as i16, self.y + y as i16, c))
        })
    }
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        let mut cells = [[EMPTY; MAX_PIECE_SIDE]; MAX_PIECE_SIDE];
        for (x, y, c) in value.shape.filled() {
            cells[y][x] = c;
        }
        Self {
            kind: value.kind(),
            side: value.shape.side() as u8,
            cells,
            x: value.x,
            y: value.y,
        }
    }
}

/// Copyable view of a session for the render adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub episode: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.episode = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            episode: 0,
        }
    }
}
