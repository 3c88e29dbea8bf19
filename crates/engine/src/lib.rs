//! Frame loop around the core session.
//!
//! The core crate only knows elapsed milliseconds. This crate supplies the
//! host side: time sources, frame deltas and a [`Runner`] that ticks the
//! session and hands snapshots to a [`Presenter`] after every change.

pub mod clock;
pub mod runner;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use clock::{FrameClock, ManualClock, MonotonicClock, TimeSource};
pub use runner::{Presenter, Runner};
