//! Placement of the score line, board frame and controls bar.
//!
//! The board scales with the viewport: one board cell is `2 * scale`
//! columns by `scale` rows, where `scale` is the largest integer that lets
//! the whole board fit beside the fixed chrome. It never drops below 1, so a
//! tiny terminal clips instead of collapsing.

use crate::types::{GameAction, Rect, CHROME_PADDING_ROWS, CONTROLS_ROWS, SCORE_ROWS};

/// Columns per board cell at scale 1, compensating for tall glyphs.
pub const CELL_ASPECT: u16 = 2;

/// Tunables for [`Layout::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Columns per board cell at scale 1.
    pub cell_aspect: u16,
    /// Blank rows reserved around the score line and controls bar.
    pub chrome_padding: u16,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            cell_aspect: CELL_ASPECT,
            chrome_padding: CHROME_PADDING_ROWS,
        }
    }
}

/// Rows taken by the frame border (top and bottom).
const BORDER_ROWS: u16 = 2;

/// Order of the on-screen buttons, left to right.
pub const BUTTON_ACTIONS: [GameAction; 4] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::RotateCw,
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub scale: u16,
    /// Columns per board cell.
    pub cell_w: u16,
    /// Rows per board cell.
    pub cell_h: u16,
    /// Score text origin.
    pub score: (u16, u16),
    /// Board frame including its border.
    pub frame: Rect,
    /// Playfield inside the border.
    pub board: Rect,
    /// Strip holding the buttons.
    pub controls: Rect,
    pub buttons: [(Rect, GameAction); 4],
}

impl Layout {
    /// Lay out a `board_w` x `board_h` board inside `viewport`.
    pub fn compute(viewport: Viewport, board_w: u16, board_h: u16, params: LayoutParams) -> Self {
        let board_w = board_w.max(1);
        let board_h = board_h.max(1);
        let aspect = params.cell_aspect.max(1);
        let chrome = (SCORE_ROWS + CONTROLS_ROWS + BORDER_ROWS).saturating_add(params.chrome_padding);

        let by_width = viewport.width.saturating_sub(2) / board_w.saturating_mul(aspect);
        let by_height = viewport.height.saturating_sub(chrome) / board_h;
        let scale = by_width.min(by_height).max(1);

        let cell_w = scale.saturating_mul(aspect);
        let cell_h = scale;
        let inner_w = board_w.saturating_mul(cell_w);
        let inner_h = board_h.saturating_mul(cell_h);
        let frame_w = inner_w.saturating_add(2);
        let frame_h = inner_h.saturating_add(BORDER_ROWS);

        let used_h = SCORE_ROWS + frame_h + CONTROLS_ROWS;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(used_h) / 2;

        let frame = Rect::new(origin_x, origin_y + SCORE_ROWS, frame_w, frame_h);
        let board = Rect::new(frame.x + 1, frame.y + 1, inner_w, inner_h);
        let controls = Rect::new(
            frame.x,
            frame.y.saturating_add(frame_h),
            frame_w,
            CONTROLS_ROWS,
        );

        let button_w = (frame_w / BUTTON_ACTIONS.len() as u16).max(1);
        let mut buttons = BUTTON_ACTIONS.map(|action| (Rect::default(), action));
        for (i, (rect, _)) in buttons.iter_mut().enumerate() {
            *rect = Rect::new(
                controls.x.saturating_add(button_w * i as u16),
                controls.y,
                button_w,
                CONTROLS_ROWS,
            );
        }

        Self {
            scale,
            cell_w,
            cell_h,
            score: (frame.x, origin_y),
            frame,
            board,
            controls,
            buttons,
        }
    }

    /// Top-left screen position of board cell `(x, y)`.
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (
            self.board.x.saturating_add(x.saturating_mul(self.cell_w)),
            self.board.y.saturating_add(y.saturating_mul(self.cell_h)),
        )
    }
}
