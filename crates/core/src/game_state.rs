//! Game state module - the player/session controller.
//!
//! Owns the board, the one active piece, the score and the drop timer, and
//! exposes the state transitions the outside world drives: `tick` (time),
//! and `move_piece`, `rotate`, `drop_piece` (input). Nothing here knows about
//! frames, terminals or wall-clock time.

use log::{debug, info, trace};

use crate::board::Board;
use crate::kick::KickSearch;
use crate::pieces::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, RotateDir, DROP_INTERVAL_MS};

/// Session parameters. The board is always the fixed 12x20 playfield the
/// snapshot and the terminal view are sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub drop_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
        }
    }
}

/// What a single drop (gravity step or soft drop) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked; `lines` rows were swept for `points`.
    Locked { lines: u32, points: u32 },
    /// The piece locked, but the next spawn collided and the session reset.
    Reset { lines: u32, points: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    active: Piece,
    source: S,
    score: u32,
    /// Number of game-over resets so far.
    episode: u32,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
}

impl GameState<UniformSource> {
    /// Create a default 12x20 session with a seeded uniform piece source.
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self::with_source(config, UniformSource::new(seed))
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a session and spawn its first piece.
    pub fn with_source(config: GameConfig, source: S) -> Self {
        let board = Board::new();
        // Placeholder; replaced by the first spawn below.
        let active = Piece::spawn(PieceKind::O, board.width());
        let mut state = Self {
            board,
            active,
            source,
            score: 0,
            episode: 0,
            drop_counter_ms: 0,
            drop_interval_ms: config.drop_interval_ms,
        };
        state.spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Replace the active piece with a fresh one from the source.
    ///
    /// If the new piece collides immediately the session is over: the board
    /// is cleared and the score reset. Returns true in that case.
    pub fn spawn(&mut self) -> bool {
        let kind = self.source.next_kind();
        self.active = Piece::spawn(kind, self.board.width());

        if self.board.collides(&self.active) {
            info!(
                "spawn of {} collided; resetting session (score was {})",
                kind.as_str(),
                self.score
            );
            self.board.clear();
            self.score = 0;
            self.episode = self.episode.wrapping_add(1);
            return true;
        }
        false
    }

    /// Accumulate elapsed time and run a gravity step once the counter
    /// passes the drop interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            return Some(self.drop_piece());
        }
        None
    }

    /// Move the piece down one row, or lock it if it cannot move.
    ///
    /// Locking merges the piece, sweeps complete rows into the score and
    /// spawns the next piece. Always resets the drop timer.
    pub fn drop_piece(&mut self) -> DropOutcome {
        self.drop_counter_ms = 0;

        self.active.y += 1;
        if !self.board.collides(&self.active) {
            return DropOutcome::Fell;
        }
        self.active.y -= 1;

        self.board.merge(&self.active);
        let sweep = self.board.sweep();
        let lines = sweep.lines();
        self.score = self.score.saturating_add(sweep.points);
        debug!(
            "locked {} at ({}, {}); cleared {} rows {:?} for {} points",
            self.active.kind().as_str(),
            self.active.x,
            self.active.y,
            lines,
            sweep.rows.as_slice(),
            sweep.points
        );

        let points = sweep.points;
        if self.spawn() {
            DropOutcome::Reset { lines, points }
        } else {
            DropOutcome::Locked { lines, points }
        }
    }

    /// Shift the piece horizontally by `dir`; a blocked move is a no-op.
    pub fn move_piece(&mut self, dir: i8) -> bool {
        let dx = dir as i16;
        self.active.x += dx;
        if self.board.collides(&self.active) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    /// Rotate the piece in place, kicking it sideways if needed.
    ///
    /// The kick displacements come from [`KickSearch`]. If none fits, the
    /// rotation is undone and the piece returns to its original column.
    pub fn rotate(&mut self, dir: RotateDir) -> bool {
        let origin_x = self.active.x;
        self.active.shape.rotate(dir);

        if !self.board.collides(&self.active) {
            return true;
        }

        for dx in KickSearch::new(self.active.shape.side()) {
            self.active.x = origin_x + dx;
            if !self.board.collides(&self.active) {
                trace!("rotation kicked by {dx}");
                return true;
            }
        }

        trace!("rotation blocked at x={origin_x}");
        self.active.shape.rotate(dir.reverse());
        self.active.x = origin_x;
        false
    }

    /// Apply a player command. Returns whether the piece moved or rotated
    /// (a soft drop always counts).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.drop_piece();
                true
            }
            GameAction::RotateCw => self.rotate(RotateDir::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDir::CounterClockwise),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(&self.active));
        out.score = self.score;
        out.episode = self.episode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    fn only(kind: PieceKind) -> GameState<SequenceSource<1>> {
        GameState::with_source(GameConfig::default(), SequenceSource::new([kind]))
    }

    #[test]
    fn test_new_session_has_a_centered_piece() {
        let state = only(PieceKind::O);
        assert_eq!(state.active().x, 5);
        assert_eq!(state.active().y, 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.episode(), 0);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_tick_waits_for_strictly_greater_counter() {
        let mut state = only(PieceKind::T);
        assert_eq!(state.tick(500), None);
        assert_eq!(state.tick(500), None);
        assert_eq!(state.drop_counter_ms(), 1000);
        assert_eq!(state.tick(1), Some(DropOutcome::Fell));
        assert_eq!(state.drop_counter_ms(), 0);
        assert_eq!(state.active().y, 1);
    }

    #[test]
    fn test_drop_resets_timer() {
        let mut state = only(PieceKind::T);
        state.tick(900);
        assert_eq!(state.drop_piece(), DropOutcome::Fell);
        assert_eq!(state.drop_counter_ms(), 0);
    }

    #[test]
    fn test_blocked_move_is_silent() {
        let mut state = only(PieceKind::O);
        let mut moved = 0;
        for _ in 0..20 {
            if state.move_piece(-1) {
                moved += 1;
            }
        }
        assert_eq!(moved, 5);
        assert_eq!(state.active().x, 0);
        assert!(!state.move_piece(-1));
        assert_eq!(state.active().x, 0);
    }

    #[test]
    fn test_o_piece_locks_at_bottom() {
        let mut state = only(PieceKind::O);
        let mut falls = 0;
        loop {
            match state.drop_piece() {
                DropOutcome::Fell => falls += 1,
                outcome => {
                    assert_eq!(outcome, DropOutcome::Locked { lines: 0, points: 0 });
                    break;
                }
            }
        }
        assert_eq!(falls, 18);
        assert_eq!(state.board().get(5, 19), Some(2));
        assert_eq!(state.board().get(6, 18), Some(2));
        assert_eq!(state.active().y, 0);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = only(PieceKind::T);
        let x = state.active().x;
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().x, x + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active().x, x);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active().y, 1);
        assert!(state.apply_action(GameAction::RotateCw));
        assert!(state.apply_action(GameAction::RotateCcw));
        assert_eq!(state.active().shape, crate::pieces::create_piece(PieceKind::T));
    }

    #[test]
    fn test_snapshot_matches_board_dimensions() {
        let mut state = GameState::with_config(GameConfig::default(), 9);
        assert_eq!(state.board().width() as usize, crate::types::BOARD_WIDTH as usize);
        assert_eq!(state.board().height() as usize, crate::types::BOARD_HEIGHT as usize);

        // Corner cells survive the copy into the fixed-size snapshot.
        state.board_mut().set(11, 19, 3);
        state.board_mut().set(0, 19, 4);
        let snap = state.snapshot();
        let filled = snap.board.iter().flatten().filter(|&&c| c != 0).count();
        assert_eq!(filled, state.board().cells().iter().filter(|&&c| c != 0).count());
        assert_eq!(snap.board[19][11], 3);
        assert_eq!(snap.board[19][0], 4);
    }

    #[test]
    fn test_custom_drop_interval() {
        let config = GameConfig {
            drop_interval_ms: 200,
        };
        let mut state = GameState::with_source(config, SequenceSource::new([PieceKind::O]));
        assert_eq!(state.drop_interval_ms(), 200);
        assert_eq!(state.tick(200), None);
        assert_eq!(state.tick(1), Some(DropOutcome::Fell));
    }

    #[test]
    fn test_snapshot_carries_active_piece() {
        let state = only(PieceKind::I);
        let snap = state.snapshot();
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::I);
        assert_eq!(active.side, 4);
        assert_eq!(active.x, 4);
        assert_eq!(snap.score, 0);
    }
}
