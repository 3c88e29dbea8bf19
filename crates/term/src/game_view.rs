//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::layout::{Layout, LayoutParams, Viewport};
use crate::palette::{color_of, BACKGROUND};
use crate::types::{GameAction, Rect, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(255, 255, 255);
const BUTTON_FG: Rgb = Rgb::new(160, 160, 170);

/// Label drawn in the middle of each on-screen button.
pub fn button_glyph(action: GameAction) -> char {
    match action {
        GameAction::MoveLeft => '◀',
        GameAction::MoveRight => '▶',
        GameAction::SoftDrop => '▼',
        GameAction::RotateCw => '⟳',
        GameAction::RotateCcw => '⟲',
    }
}

/// A lightweight terminal view of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameView {
    params: LayoutParams,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns per board cell at scale 1.
    pub fn with_cell_aspect(mut self, cell_aspect: u16) -> Self {
        self.params.cell_aspect = cell_aspect.max(1);
        self
    }

    /// Blank rows kept free around the score line and controls bar.
    pub fn with_chrome(mut self, padding_rows: u16) -> Self {
        self.params.chrome_padding = padding_rows;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        Layout::compute(
            viewport,
            BOARD_WIDTH as u16,
            BOARD_HEIGHT as u16,
            self.params,
        )
    }

    /// Render a snapshot into an existing framebuffer and return the layout
    /// used, so callers can hit-test the buttons it drew.
    ///
    /// Reuses the framebuffer allocation while the viewport size is stable.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Layout {
        let layout = self.layout(viewport);
        let base = CellStyle::new(TEXT_FG, BACKGROUND);

        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', base));

        let (sx, sy) = layout.score;
        let end = fb.put_str(sx, sy, "Score: ", base.bold());
        fb.put_u32(end, sy, snap.score, base.bold());

        draw_border(fb, layout.frame, CellStyle::new(BORDER_FG, BACKGROUND));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(color) = color_of(cell) {
                    fill_cell(fb, &layout, x as u16, y as u16, color);
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y, cell) in active.board_cells() {
                if y < 0 || x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
                    continue;
                }
                if let Some(color) = color_of(cell) {
                    fill_cell(fb, &layout, x as u16, y as u16, color);
                }
            }
        }

        let button_style = CellStyle::new(BUTTON_FG, BACKGROUND);
        for &(rect, action) in layout.buttons.iter() {
            draw_button(fb, rect, button_glyph(action), button_style);
        }

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn fill_cell(fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, color: Rgb) {
    let (px, py) = layout.cell_origin(x, y);
    fb.fill_rect(
        px,
        py,
        layout.cell_w,
        layout.cell_h,
        BLOCK,
        CellStyle::new(color, BACKGROUND),
    );
}

fn draw_border(fb: &mut FrameBuffer, rect: Rect, style: CellStyle) {
    let Rect { x, y, w, h } = rect;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_button(fb: &mut FrameBuffer, rect: Rect, glyph: char, style: CellStyle) {
    // Narrow buttons get the glyph only.
    if rect.w >= 3 && rect.h >= 3 {
        draw_border(fb, rect, style);
    }
    let gx = rect.x.saturating_add(rect.w / 2);
    let gy = rect.y.saturating_add(rect.h / 2);
    fb.put_char(gx, gy, glyph, style.bold());
}
