//! RNG module - piece selection.
//!
//! The controller draws kinds through the [`PieceSource`] trait so a seeded
//! generator, a scripted sequence or a closure can stand behind it. The
//! default source is a uniform draw over the seven kinds using a small LCG,
//! which keeps whole games reproducible from a seed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a fixed point of the multiply step.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus; the low
    /// bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the kind of every spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F> PieceSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Uniform choice over the seven kinds.
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let n = PieceKind::SPAWN_ORDER.len() as u32;
        PieceKind::SPAWN_ORDER[self.rng.next_range(n) as usize]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
///
/// Meant for tests and demos that need to know exactly what spawns next.
#[derive(Debug, Clone)]
pub struct SequenceSource<const N: usize> {
    kinds: [PieceKind; N],
    next: usize,
}

impl<const N: usize> SequenceSource<N> {
    pub fn new(kinds: [PieceKind; N]) -> Self {
        Self { kinds, next: 0 }
    }
}

impl<const N: usize> PieceSource for SequenceSource<N> {
    fn next_kind(&mut self) -> PieceKind {
        if N == 0 {
            return PieceKind::O;
        }
        let kind = self.kinds[self.next % N];
        self.next = (self.next + 1) % N;
        kind
    }
}
