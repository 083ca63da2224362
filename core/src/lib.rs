//! COMPASS Adaptive Operator Selection Core
//!
//! This crate implements the compass scheme for adaptive operator selection
//! inside population-based evolutionary optimizers. Each generation, the
//! embedding loop asks the engine which variation operator (mutation,
//! crossover) to apply next; the engine answers by tracking how past choices
//! moved population quality and diversity, scalarizing that two-dimensional
//! signal onto a configured trade-off direction, and sampling from a smoothed
//! probability distribution with a guaranteed exploration floor.
//!
//! # Mathematical Foundations
//!
//! The scheme is a non-stationary multi-armed bandit heuristic:
//! - per-operator bounded FIFO of (Δquality, Δdiversity) rewards,
//! - simple-moving-average weight estimates over that window,
//! - cosine projection of normalized weights onto a compass direction
//!   `(cos θ, sin θ)`,
//! - probability smoothing guaranteeing `p_i ≥ min_p` for every operator.
//!
//! The engine makes no convergence or optimality guarantee; it is a reward
//! tracking policy, not a proven-optimal bandit algorithm.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod selection;

pub use self::selection::{
    CompassConfig, CompassSelector, OperatorSelection, QualityDiversity, RandomSource,
    ScriptedRandom, SelectionError,
};
