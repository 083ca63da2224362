//! Quality-diversity measurement of population snapshots
//!
//! A population snapshot is reduced to a two-dimensional signal: quality is
//! the arithmetic mean of the fitness values, diversity is the population
//! standard deviation (normalized by N, not N−1), used as a spread proxy.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

/// Quality-diversity pair describing one population snapshot
///
/// Also used for the per-generation *deltas* attributed to operators, where
/// both components are signed differences between consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityDiversity {
    /// Mean fitness of the snapshot
    pub quality: f64,

    /// Population standard deviation of fitness
    pub diversity: f64,
}

impl QualityDiversity {
    /// Component-wise difference `self − earlier`.
    #[inline]
    pub fn delta_from(&self, earlier: &QualityDiversity) -> QualityDiversity {
        QualityDiversity {
            quality: self.quality - earlier.quality,
            diversity: self.diversity - earlier.diversity,
        }
    }
}

/// Computes the quality-diversity pair of a fitness snapshot.
///
/// Order of the values is irrelevant. The caller must guarantee a non-empty
/// snapshot; the engine's feedback path validates this before calling.
pub fn population_qd(fitness: &[f64]) -> QualityDiversity {
    debug_assert!(!fitness.is_empty(), "fitness snapshot must be non-empty");

    let n = fitness.len() as f64;
    let mean = fitness.iter().sum::<f64>() / n;
    let sq_sum = fitness.iter().map(|f| (f - mean).powi(2)).sum::<f64>();

    QualityDiversity {
        quality: mean,
        diversity: (sq_sum / n).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn qd_of_reference_snapshot() {
        let qd = population_qd(&[10.0, 20.0, 30.0]);

        assert_relative_eq!(qd.quality, 20.0);
        // Population variance: ((-10)^2 + 0 + 10^2) / 3 = 200/3
        assert_relative_eq!(qd.diversity, (200.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn qd_of_uniform_population_has_zero_diversity() {
        let qd = population_qd(&[7.5, 7.5, 7.5, 7.5]);

        assert_relative_eq!(qd.quality, 7.5);
        assert_relative_eq!(qd.diversity, 0.0);
    }

    #[test]
    fn qd_is_order_invariant() {
        let a = population_qd(&[1.0, 4.0, 9.0, 16.0]);
        let b = population_qd(&[16.0, 1.0, 9.0, 4.0]);

        assert_relative_eq!(a.quality, b.quality);
        assert_relative_eq!(a.diversity, b.diversity);
    }

    #[test]
    fn delta_is_component_wise() {
        let earlier = QualityDiversity { quality: 20.0, diversity: 8.0 };
        let current = QualityDiversity { quality: 25.0, diversity: 6.5 };

        let delta = current.delta_from(&earlier);
        assert_relative_eq!(delta.quality, 5.0);
        assert_relative_eq!(delta.diversity, -1.5);
    }
}
