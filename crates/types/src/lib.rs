//! Shared vocabulary for the falling-block game.
//!
//! Pure data types and constants with no dependencies, shared by the engine,
//! the input mapping and the terminal renderer.
//!
//! # Board dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell values
//!
//! A [`Cell`] is a color index: `0` is empty, `1..=7` is a locked color that
//! also identifies the piece kind that produced it (see [`PieceKind::color_index`]).
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval, fixed for the whole session |
//! | `FRAME_MS` | 16 | Target frame budget of the presentation loop |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{GameAction, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.color_index(), 2);
//! assert_eq!(RotateDir::Clockwise.reverse(), RotateDir::CounterClockwise);
//! assert_eq!(GameAction::from_str("rotateCcw"), Some(GameAction::RotateCcw));
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds.
///
/// A gravity step fires once the accumulated frame time is strictly greater
/// than this value.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Frame budget of the presentation loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points for the first row cleared by a single sweep; each further row doubles.
pub const POINTS_PER_LINE: u32 = 10;

/// Largest piece side (the I piece is 4x4).
pub const MAX_PIECE_SIDE: usize = 4;

/// Terminal rows reserved for the score line above the board.
pub const SCORE_ROWS: u16 = 1;

/// Terminal rows reserved for the touch controls bar below the board.
pub const CONTROLS_ROWS: u16 = 3;

/// Extra rows kept free around the board and chrome.
pub const CHROME_PADDING_ROWS: u16 = 2;

/// A board or piece cell: 0 is empty, 1-7 is a color index.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// The seven piece kinds.
///
/// Declared in color-index order: `T`=1, `O`=2, `L`=3, `J`=4, `I`=5, `S`=6, `Z`=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in color-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// The order a uniform draw indexes into (`"ILJOTSZ"`).
    pub const SPAWN_ORDER: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color index written into the board when this kind locks.
    pub fn color_index(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`].
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_index(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color_index(0), None);
    /// assert_eq!(PieceKind::from_color_index(8), None);
    /// ```
    pub fn from_color_index(cell: Cell) -> Option<Self> {
        match cell {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    Clockwise,
    CounterClockwise,
}

impl RotateDir {
    /// `+1` for clockwise, `-1` for counter-clockwise.
    pub fn sign(self) -> i8 {
        match self {
            RotateDir::Clockwise => 1,
            RotateDir::CounterClockwise => -1,
        }
    }

    /// Map a signed direction onto a rotation; zero has no direction.
    ///
    /// ```
    /// use tui_blocks_types::RotateDir;
    ///
    /// assert_eq!(RotateDir::from_sign(3), Some(RotateDir::Clockwise));
    /// assert_eq!(RotateDir::from_sign(-1), Some(RotateDir::CounterClockwise));
    /// assert_eq!(RotateDir::from_sign(0), None);
    /// ```
    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            s if s > 0 => Some(RotateDir::Clockwise),
            s if s < 0 => Some(RotateDir::CounterClockwise),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            RotateDir::Clockwise => RotateDir::CounterClockwise,
            RotateDir::CounterClockwise => RotateDir::Clockwise,
        }
    }
}

/// Discrete player commands.
///
/// Every binding (keyboard key or touch button) resolves to one of these and
/// each maps 1:1 onto an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (same as a gravity step)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl GameAction {
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
        }
    }
}

/// Axis-aligned rectangle in terminal cell coordinates.
///
/// Used for touch regions: the renderer lays buttons out, the input layer
/// hit-tests pointer presses against the same rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment test.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col - self.x) < self.w
            && (row - self.y) < self.h
    }
}
