//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events onto [`crate::types::GameAction`]: keyboard keys
//! through a fixed table and pointer presses through on-screen touch
//! buttons. There is no key-repeat synthesis or debouncing; every event
//! becomes at most one command.

pub mod dispatch;
pub mod map;
pub mod touch;

pub use tui_blocks_types as types;

pub use dispatch::{map_event, Command};
pub use map::{handle_key_event, should_quit};
pub use touch::{TouchButton, TouchPad, MAX_BUTTONS};
