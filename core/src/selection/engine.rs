//! Compass selection engine
//!
//! `CompassSelector` composes the leaf components into the stateful engine
//! consumed by the generational loop: it owns the operator set, one bounded
//! reward window and rolling weight per operator, the previous
//! quality-diversity snapshot, and the single pending-selection slot linking
//! a choice to the feedback that follows it.
//!
//! # State Machine
//!
//! ```text
//! ColdStart --update_weights--> Idle --provide--> Pending
//!                                ^                    |
//!                                +--update_weights----+
//! ```
//!
//! The cold-start transition stores the baseline snapshot without attributing
//! any reward; every later `update_weights` requires a pending selection.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::sync::Arc;

use log::{debug, trace};
use nalgebra::Vector2;
use rand::rngs::ThreadRng;
use uuid::Uuid;

use crate::selection::compass::{compute_awards, CompassConfig};
use crate::selection::history::RewardWindow;
use crate::selection::operator::OperatorSelection;
use crate::selection::probability::{compute_probabilities, pick_index};
use crate::selection::qd::{population_qd, QualityDiversity};
use crate::selection::random::RandomSource;
use crate::selection::SelectionError;

/// Adaptive operator selector driven by quality-diversity feedback
///
/// Generic over the operator type `T` (whatever variation strategies the
/// embedding optimizer registers) and the injected random source `R`.
/// Single-threaded by design: state is exclusively owned, never aliased;
/// concurrent populations each need their own instance.
#[derive(Debug)]
pub struct CompassSelector<T, R: RandomSource> {
    /// Ordered operator set; indices stable for the engine's lifetime
    operators: Vec<Arc<T>>,

    /// Validated configuration
    config: CompassConfig,

    /// Compass direction `(cos θ, sin θ)`
    direction: Vector2<f64>,

    /// Rolling weight per operator; neutral `(1, 1)` prior before feedback
    weights: Vec<QualityDiversity>,

    /// Bounded reward history per operator
    history: Vec<RewardWindow>,

    /// Most recent quality-diversity snapshot; `None` before cold start
    previous_qd: Option<QualityDiversity>,

    /// Index of the selection awaiting feedback
    pending: Option<usize>,

    /// Per-operator selection counts
    selection_counts: Vec<u64>,

    /// Total selections made
    total_selections: u64,

    /// Injected uniform random source
    rng: R,

    /// Unique engine identifier
    id: Uuid,
}

impl<T> CompassSelector<T, ThreadRng> {
    /// Creates an engine backed by thread-local entropy.
    pub fn new(
        operators: Vec<Arc<T>>,
        config: CompassConfig,
    ) -> Result<Self, SelectionError> {
        Self::with_rng(operators, config, rand::thread_rng())
    }
}

impl<T, R: RandomSource> CompassSelector<T, R> {
    /// Creates an engine with an injected random source.
    ///
    /// Validates the configuration against the operator count and seeds every
    /// operator with the neutral `(1, 1)` weight prior and an empty reward
    /// window.
    pub fn with_rng(
        operators: Vec<Arc<T>>,
        config: CompassConfig,
        rng: R,
    ) -> Result<Self, SelectionError> {
        config.validate(operators.len())?;

        let count = operators.len();
        let id = Uuid::new_v4();
        debug!(
            "compass selector {} created: {} operators, theta={}, window={}, min_p={}",
            id, count, config.theta, config.window_size, config.min_p
        );

        Ok(Self {
            direction: config.direction(),
            weights: vec![QualityDiversity { quality: 1.0, diversity: 1.0 }; count],
            history: (0..count).map(|_| RewardWindow::new(config.window_size)).collect(),
            selection_counts: vec![0; count],
            total_selections: 0,
            previous_qd: None,
            pending: None,
            operators,
            config,
            rng,
            id,
        })
    }

    /// Current selection distribution derived from the rolling weights.
    ///
    /// Read-only: computing the distribution does not advance the state
    /// machine. Useful for external experiment recording.
    pub fn probabilities(&self) -> Result<Vec<f64>, SelectionError> {
        let awards = compute_awards(&self.weights, &self.direction);
        compute_probabilities(&awards, self.config.min_p)
    }

    /// Rolling quality-diversity weight per operator.
    pub fn weights(&self) -> &[QualityDiversity] {
        &self.weights
    }

    /// Number of times each operator has been selected.
    pub fn selection_counts(&self) -> &[u64] {
        &self.selection_counts
    }

    /// Total selections made over the engine's lifetime.
    pub fn total_selections(&self) -> u64 {
        self.total_selections
    }

    /// Number of registered operators.
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// Unique engine identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl<T, R: RandomSource> OperatorSelection<T> for CompassSelector<T, R> {
    fn provide(&mut self) -> Result<Arc<T>, SelectionError> {
        if let Some(index) = self.pending {
            return Err(SelectionError::SelectionPending { index });
        }

        let probabilities = self.probabilities()?;
        let draw = self.rng.next_uniform();
        let index = pick_index(&probabilities, draw);

        self.pending = Some(index);
        self.selection_counts[index] += 1;
        self.total_selections += 1;

        debug!(
            "selector {}: operator {} selected (p={:.4}, draw={:.4})",
            self.id, index, probabilities[index], draw
        );

        Ok(Arc::clone(&self.operators[index]))
    }

    fn update_weights(&mut self, fitness: &[f64]) -> Result<(), SelectionError> {
        if fitness.is_empty() {
            return Err(SelectionError::EmptyPopulation);
        }

        let current = population_qd(fitness);

        // Cold start: seed the baseline snapshot. Nothing can be attributed
        // yet, so a selection made before the first snapshot is discarded.
        let Some(previous) = self.previous_qd else {
            self.previous_qd = Some(current);
            self.pending = None;
            debug!(
                "selector {}: baseline snapshot stored (quality={:.4}, diversity={:.4})",
                self.id, current.quality, current.diversity
            );
            return Ok(());
        };

        let index = self.pending.take().ok_or(SelectionError::NoPendingSelection)?;

        let delta = current.delta_from(&previous);
        self.history[index].push(delta);
        // Window is non-empty after the push.
        self.weights[index] = self.history[index].mean().unwrap_or(delta);
        self.previous_qd = Some(current);

        trace!(
            "selector {}: operator {} rewarded (dq={:+.4}, dd={:+.4}), weight now ({:.4}, {:.4})",
            self.id,
            index,
            delta.quality,
            delta.diversity,
            self.weights[index].quality,
            self.weights[index].diversity
        );

        Ok(())
    }
}
