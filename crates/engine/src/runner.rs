//! Runner: the explicit scheduling loop around a [`GameState`].
//!
//! One [`Runner::frame`] measures elapsed time, lets the session apply
//! gravity and then always redraws. Input goes through [`Runner::dispatch`],
//! which applies the command immediately and redraws as well. Nothing is
//! queued or coalesced; commands take effect in arrival order.

use anyhow::Result;
use log::debug;

use crate::clock::{FrameClock, TimeSource};
use crate::core::{DropOutcome, GameSnapshot, GameState, PieceSource};
use crate::types::{GameAction, FRAME_MS};

/// The render adapter: receives a snapshot after every state change.
pub trait Presenter {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;
}

impl<F> Presenter for F
where
    F: FnMut(&GameSnapshot) -> Result<()>,
{
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        self(snap)
    }
}

pub struct Runner<S, T> {
    state: GameState<S>,
    time: T,
    clock: FrameClock,
    snapshot: GameSnapshot,
    frames: u64,
}

impl<S: PieceSource, T: TimeSource> Runner<S, T> {
    pub fn new(state: GameState<S>, time: T) -> Self {
        Self {
            state,
            time,
            clock: FrameClock::new(),
            snapshot: GameSnapshot::default(),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<S> {
        &mut self.state
    }

    pub fn time_mut(&mut self) -> &mut T {
        &mut self.time
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: advance gravity by the elapsed time, then redraw.
    pub fn frame(&mut self, presenter: &mut impl Presenter) -> Result<Option<DropOutcome>> {
        let now = self.time.now_ms();
        let elapsed = self.clock.delta(now);
        let outcome = self.state.tick(elapsed);
        if let Some(DropOutcome::Reset { .. }) = outcome {
            debug!(
                "frame {}: session reset (episode {})",
                self.frames,
                self.state.episode()
            );
        }
        self.frames += 1;
        self.redraw(presenter)?;
        Ok(outcome)
    }

    /// Apply one input command, then redraw.
    pub fn dispatch(
        &mut self,
        action: GameAction,
        presenter: &mut impl Presenter,
    ) -> Result<bool> {
        let changed = self.state.apply_action(action);
        self.redraw(presenter)?;
        Ok(changed)
    }

    pub fn redraw(&mut self, presenter: &mut impl Presenter) -> Result<()> {
        self.state.snapshot_into(&mut self.snapshot);
        presenter.present(&self.snapshot)
    }

    /// Milliseconds until the next frame is due.
    pub fn until_next_frame_ms(&mut self) -> u64 {
        let now = self.time.now_ms();
        self.clock.remaining(now, FRAME_MS)
    }
}
