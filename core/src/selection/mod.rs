//! Adaptive operator selection framework
//!
//! This module composes the compass selection pipeline from its leaf
//! components: quality-diversity measurement, bounded reward histories,
//! award scalarization, probability smoothing, and the stateful engine
//! that ties a selection to the feedback that follows it.
//!
//! # Call Contract
//!
//! The embedding generational loop must strictly alternate
//! [`OperatorSelection::provide`] and [`OperatorSelection::update_weights`],
//! with a single sanctioned exception: the very first `update_weights` call
//! seeds the baseline snapshot before any selection has been made. Any other
//! deviation is a sequencing error and fatal to the current run.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod compass;
pub mod engine;
pub mod history;
pub mod operator;
pub mod probability;
pub mod qd;
pub mod random;

pub use self::compass::CompassConfig;
pub use self::engine::CompassSelector;
pub use self::operator::OperatorSelection;
pub use self::qd::{population_qd, QualityDiversity};
pub use self::random::{RandomSource, ScriptedRandom};

use thiserror::Error;

/// Comprehensive error types for adaptive operator selection
///
/// Every variant represents either a contract violation by the caller or an
/// internal-invariant breach; none is a recoverable runtime condition. The
/// embedding system is expected to abort the current optimization run rather
/// than continue with corrupted adaptive state.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Construction-time configuration rejection
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Feedback reported while no selection is outstanding
    #[error("feedback reported with no pending selection")]
    NoPendingSelection,

    /// Re-entrant selection request before feedback for the previous one
    #[error("operator requested while selection {index} is still awaiting feedback")]
    SelectionPending { index: usize },

    /// Empty fitness snapshot on the feedback path
    #[error("fitness snapshot is empty")]
    EmptyPopulation,

    /// Internal invariant breach: an award is negative after the shift step
    #[error("negative award {award} for operator {index} after shift")]
    NegativeAward { index: usize, award: f64 },
}
