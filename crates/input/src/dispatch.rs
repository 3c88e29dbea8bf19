//! One entry point for every terminal event the game cares about.

use crossterm::event::{Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::touch::TouchPad;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Resize { width: u16, height: u16 },
    Quit,
}

/// Translate a terminal event.
///
/// Key presses and repeats both count; every repeat is a separate command,
/// exactly like a fresh press. Releases are ignored.
pub fn map_event(event: &Event, pad: &TouchPad) -> Option<Command> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if should_quit(*key) {
                return Some(Command::Quit);
            }
            handle_key_event(*key).map(Command::Action)
        }
        Event::Mouse(mouse) => pad.handle_mouse_event(*mouse).map(Command::Action),
        Event::Resize(width, height) => Some(Command::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
