//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependency on terminals, clocks or input devices, which makes it:
//!
//! - **Deterministic**: the same seed (or scripted [`PieceSource`]) replays the same game
//! - **Testable**: every transition is a plain method call
//! - **Allocation-free in play**: ticks, moves, rotations, locks and spawns stay on the stack
//!
//! # Module Structure
//!
//! - [`matrix`]: row-major grids and in-place square rotation
//! - [`pieces`]: the seven fixed shapes and the active [`Piece`]
//! - [`board`]: collision, merge and the row sweep
//! - [`scoring`]: doubling line-clear points
//! - [`kick`]: the sideways search after a blocked rotation
//! - [`rng`]: seeded uniform piece selection behind the [`PieceSource`] trait
//! - [`game_state`]: the session controller tying it all together
//! - [`snapshot`]: copyable state for renderers
//!
//! # Game Rules
//!
//! - The board is 12x20; rows above the top are open, walls and floor are solid
//! - A new piece is chosen uniformly from the seven kinds and centered at the top
//! - If it collides on arrival, the board and score are wiped and play continues
//! - Gravity moves the piece down once the drop counter passes 1000ms
//! - A piece that cannot fall locks; complete rows are cleared bottom-up
//! - Clearing `k` rows in one lock scores `10 * (2^k - 1)`
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{DropOutcome, GameState};
//! use tui_blocks_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//!
//! // Fall until the piece locks.
//! while game.drop_piece() == DropOutcome::Fell {}
//!
//! assert!(!game.board().is_empty());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per frame with
//! the elapsed milliseconds; it runs a gravity step when due.

pub mod board;
pub mod game_state;
pub mod kick;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Sweep};
pub use game_state::{DropOutcome, GameConfig, GameState};
pub use kick::KickSearch;
pub use matrix::{rotate_square, Grid};
pub use pieces::{create_piece, create_piece_named, Piece, Shape};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{line_clear_score, SweepScore};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
