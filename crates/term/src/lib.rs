//! Terminal front end.
//!
//! Renders game snapshots into a character framebuffer, with each board cell
//! drawn as a `2*scale` by `scale` block so it looks square on typical
//! terminal fonts. Pure parts (`fb`, `palette`, `layout`, `game_view`) are
//! unit-tested; `renderer` and `presenter` perform the terminal I/O.

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod palette;
pub mod presenter;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{button_glyph, GameView};
pub use layout::{Layout, LayoutParams, Viewport, BUTTON_ACTIONS, CELL_ASPECT};
pub use palette::{color_of, BACKGROUND, PIECE_COLORS};
pub use presenter::TerminalPresenter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
