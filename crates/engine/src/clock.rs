//! Frame timing.
//!
//! The host calls into the engine once per display frame with a timestamp;
//! [`FrameClock`] turns consecutive timestamps into elapsed deltas. The
//! timestamp itself comes from a [`TimeSource`], so tests can drive time by
//! hand.

use std::time::Instant;

/// Milliseconds since some fixed origin.
pub trait TimeSource {
    fn now_ms(&mut self) -> u64;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ms(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    pub fn set(&mut self, ms: u64) {
        self.now_ms = ms;
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&mut self) -> u64 {
        self.now_ms
    }
}

/// Converts frame timestamps into deltas.
///
/// The previous timestamp starts at 0, so the first frame reports the time
/// elapsed since the origin of the time source.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: 0 }
    }

    /// Elapsed time since the previous frame. Timestamps that go backwards
    /// yield 0. Deltas beyond `u32::MAX` are clamped.
    pub fn delta(&mut self, now_ms: u64) -> u32 {
        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;
        delta.min(u32::MAX as u64) as u32
    }

    pub fn last_ms(&self) -> u64 {
        self.last_ms
    }

    /// Milliseconds left in a frame of `budget_ms` that started at the last
    /// timestamp.
    pub fn remaining(&self, now_ms: u64, budget_ms: u32) -> u64 {
        (budget_ms as u64).saturating_sub(now_ms.saturating_sub(self.last_ms))
    }
}
