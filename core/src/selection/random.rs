//! Injected uniform random sources
//!
//! The engine consumes randomness through a narrow seam: one uniform draw in
//! `[0, 1)` per selection. Production runs use entropy-backed generators from
//! `rand`; experiments that must be replayed bit-for-bit inject a seeded
//! generator or a scripted sequence of draws.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use rand::rngs::{SmallRng, StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform draws in `[0, 1)` consumed by the sampling step
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for StdRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for SmallRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

/// Deterministic replay source backed by a scripted sequence of draws
///
/// Draws are consumed front-to-back; once exhausted the source cycles back
/// to the start of the script, keeping long replays well-defined.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<f64>,
    pending: VecDeque<f64>,
}

impl ScriptedRandom {
    /// Creates a replay source from a non-empty draw script.
    pub fn new(script: Vec<f64>) -> Self {
        assert!(!script.is_empty(), "replay script must be non-empty");
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_uniform(&mut self) -> f64 {
        if self.pending.is_empty() {
            self.pending = self.script.iter().copied().collect();
        }
        // Non-empty by construction and refill above.
        self.pending.pop_front().unwrap()
    }
}
