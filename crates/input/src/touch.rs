//! Touch buttons: pointer presses inside on-screen regions.
//!
//! The renderer decides where the buttons are drawn and hands the regions
//! over every frame; a press is resolved against whatever layout was drawn
//! last.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{GameAction, Rect};

/// Maximum number of buttons a pad holds.
pub const MAX_BUTTONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchButton {
    pub rect: Rect,
    pub action: GameAction,
}

#[derive(Debug, Clone, Default)]
pub struct TouchPad {
    buttons: ArrayVec<TouchButton, MAX_BUTTONS>,
}

impl TouchPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the button layout. Buttons past [`MAX_BUTTONS`] are ignored.
    pub fn set_buttons(&mut self, buttons: impl IntoIterator<Item = TouchButton>) {
        self.buttons.clear();
        for button in buttons {
            if self.buttons.try_push(button).is_err() {
                break;
            }
        }
    }

    pub fn buttons(&self) -> &[TouchButton] {
        &self.buttons
    }

    /// The action of the first button containing the cell, if any.
    pub fn hit(&self, col: u16, row: u16) -> Option<GameAction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(col, row))
            .map(|b| b.action)
    }

    /// Only a left-button press counts as a touch; drags and releases are
    /// ignored.
    pub fn handle_mouse_event(&self, event: MouseEvent) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.hit(event.column, event.row),
            _ => None,
        }
    }
}
