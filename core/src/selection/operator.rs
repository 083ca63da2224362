//! Operator provider abstraction consumed by the generational loop
//!
//! The engine is generic in the concrete operator type: registered operators
//! are whatever variation strategies (mutations, crossovers) the embedding
//! optimizer supplies. Handles are shared and non-owning from the caller's
//! perspective; the engine keeps its own reference to every operator for its
//! entire lifetime and never destroys one.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::sync::Arc;

use crate::selection::SelectionError;

/// Adaptive provider of variation operators
///
/// The two operations mirror the per-generation duty cycle of the embedding
/// loop: request an operator before variation, report the resulting fitness
/// snapshot after evaluation. Implementations are stateful and expect strict
/// alternation of the two calls (see the module docs of [`crate::selection`]
/// for the single sanctioned cold-start exception).
pub trait OperatorSelection<T> {
    /// Samples an operator from the current selection distribution.
    ///
    /// The returned handle is a shared reference; the provider records the
    /// choice internally so the next feedback call can be attributed to it.
    fn provide(&mut self) -> Result<Arc<T>, SelectionError>;

    /// Reports the fitness snapshot of the population produced by the last
    /// provided operator, updating that operator's reward estimate.
    fn update_weights(&mut self, fitness: &[f64]) -> Result<(), SelectionError>;
}
