//! Injectable random sources.
//!
//! Every probabilistic decision in the engine (spontaneous re-targeting, the
//! clear-or-continue draw at arrival, uniform shelf picks, spawn speeds) goes
//! through the object-safe [`RandomSource`] trait.  Production runs use
//! [`SimRng`], a seeded `SmallRng`, so a seed fully reproduces a run.  Tests
//! use [`SequenceRng`] to replay a scripted list of draws and force a
//! specific branch.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
///
/// Only [`unit`](Self::unit) is required; the helpers derive every other
/// draw from it so that one scripted value maps to exactly one decision.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// `true` with probability `p` (clamped to `[0, 1]`).  Consumes one draw.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p.clamp(0.0, 1.0)
    }

    /// Uniform index into a collection of `len` items.  Consumes one draw,
    /// or none when `len == 0`.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = (self.unit() * len as f64) as usize;
        Some(i.min(len - 1))
    }

    /// Uniform `f32` in `[lo, hi)`.  Consumes one draw.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit() as f32
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation-level RNG.
///
/// Used only from the single-threaded frame loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`.  An empty sequence always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    draws:  Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self { draws: draws.into(), cursor: 0 }
    }

    /// A source that returns `value` forever.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let v = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
