//! Probability smoothing with a guaranteed exploration floor
//!
//! Awards are turned into a selection distribution that preserves their
//! relative ordering while guaranteeing every operator a minimum probability
//! `min_p`, preventing premature convergence onto a single operator. When the
//! floor condition triggers, a constant `ksi` is blended into every award:
//!
//! ```text
//! ksi = (min_p·Σa − min(a)) / (1 − min_p·N)
//! p_i = (a_i + ksi) / (Σa + ksi·N)
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::warn;

use crate::selection::SelectionError;

/// Converts a shifted award vector into a selection distribution.
///
/// Inputs come from the scalarizer: all awards ≥ 0 with minimum exactly 0.
/// The minimum is recomputed defensively; a negative value indicates an
/// upstream invariant breach and is surfaced rather than propagated into
/// NaN or garbage probabilities. An all-zero award vector (every operator
/// tied) yields the uniform distribution.
pub fn compute_probabilities(awards: &[f64], min_p: f64) -> Result<Vec<f64>, SelectionError> {
    let n = awards.len() as f64;
    let award_sum: f64 = awards.iter().sum();
    let (min_index, min_award) = awards
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, a)| {
            if a < best.1 {
                (i, a)
            } else {
                best
            }
        });

    if min_award < 0.0 {
        return Err(SelectionError::NegativeAward {
            index: min_index,
            award: min_award,
        });
    }

    if award_sum == 0.0 {
        return Ok(vec![1.0 / n; awards.len()]);
    }

    let ksi = if min_award / award_sum < min_p {
        (min_p * award_sum - min_award) / (1.0 - min_p * n)
    } else {
        0.0
    };

    Ok(awards
        .iter()
        .map(|award| (award + ksi) / (award_sum + ksi * n))
        .collect())
}

/// Picks an index from a distribution via a cumulative walk.
///
/// Selects the first index where the running sum reaches the draw. A draw
/// beyond the cumulative tail is reachable only through floating-point
/// rounding; the deterministic fallback is the last index.
pub fn pick_index(probabilities: &[f64], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, probability) in probabilities.iter().enumerate() {
        cumulative += probability;
        if cumulative >= draw {
            return index;
        }
    }

    warn!(
        "cumulative distribution tail {} below draw {}; falling back to last operator",
        cumulative, draw
    );
    probabilities.len() - 1
}
