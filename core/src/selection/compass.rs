//! Compass configuration and award scalarization
//!
//! The compass direction is a unit vector `(cos θ, sin θ)` encoding the
//! configured trade-off between quality (θ = 0) and diversity (θ = π/2).
//! Scalarization normalizes each weight dimension by its maximum across
//! operators, projects the normalized pair onto the compass direction, and
//! shifts the resulting awards so the minimum is exactly zero.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::f64::consts::FRAC_PI_2;

use log::warn;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::selection::qd::QualityDiversity;
use crate::selection::SelectionError;

/// Construction-time configuration of the compass selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Trade-off angle in radians; 0 = pure quality, π/2 = pure diversity
    pub theta: f64,

    /// Reward history capacity per operator; larger adapts slower
    pub window_size: usize,

    /// Exploration floor: minimum selection probability per operator
    pub min_p: f64,
}

impl CompassConfig {
    /// Validates the configuration against an operator count.
    ///
    /// Rejects degenerate operator sets (N < 2), empty windows, non-finite
    /// angles, and exploration floors for which the smoothing denominator
    /// `1 − min_p·N` would be non-positive.
    pub fn validate(&self, operator_count: usize) -> Result<(), SelectionError> {
        if operator_count < 2 {
            return Err(SelectionError::InvalidConfiguration {
                reason: format!("at least 2 operators required, got {operator_count}"),
            });
        }
        if self.window_size == 0 {
            return Err(SelectionError::InvalidConfiguration {
                reason: "window_size must be positive".to_string(),
            });
        }
        if !self.theta.is_finite() {
            return Err(SelectionError::InvalidConfiguration {
                reason: format!("theta must be finite, got {}", self.theta),
            });
        }
        if !(self.min_p > 0.0) {
            return Err(SelectionError::InvalidConfiguration {
                reason: format!("min_p must be positive, got {}", self.min_p),
            });
        }
        if self.min_p * operator_count as f64 >= 1.0 {
            return Err(SelectionError::InvalidConfiguration {
                reason: format!(
                    "min_p {} with {} operators makes the smoothing denominator non-positive",
                    self.min_p, operator_count
                ),
            });
        }

        if !(0.0..=FRAC_PI_2).contains(&self.theta) {
            warn!(
                "theta {} outside the expected [0, pi/2] trade-off range",
                self.theta
            );
        }

        Ok(())
    }

    /// Compass direction `(cos θ, sin θ)` for this configuration.
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.theta.cos(), self.theta.sin())
    }
}

/// Scalarizes per-operator weights into non-negative awards.
///
/// Each dimension is normalized by its maximum across operators when that
/// maximum is positive; a non-positive maximum leaves the dimension
/// unnormalized, guarding the division by zero and the ordering flip a
/// negative divisor would cause. The normalized pair is projected onto the
/// compass direction (dot product over the direction's Euclidean norm) and
/// all awards are shifted so the minimum is exactly zero.
pub fn compute_awards(weights: &[QualityDiversity], direction: &Vector2<f64>) -> Vec<f64> {
    let mut qualities: Vec<f64> = weights.iter().map(|w| w.quality).collect();
    let mut diversities: Vec<f64> = weights.iter().map(|w| w.diversity).collect();

    let max_quality = qualities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_diversity = diversities.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_quality > 0.0 {
        for quality in &mut qualities {
            *quality /= max_quality;
        }
    }
    if max_diversity > 0.0 {
        for diversity in &mut diversities {
            *diversity /= max_diversity;
        }
    }

    let norm = direction.norm();
    let mut awards: Vec<f64> = qualities
        .iter()
        .zip(&diversities)
        .map(|(&quality, &diversity)| Vector2::new(quality, diversity).dot(direction) / norm)
        .collect();

    let min_award = awards.iter().copied().fold(f64::INFINITY, f64::min);
    for award in &mut awards {
        *award -= min_award;
    }

    awards
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn weight(quality: f64, diversity: f64) -> QualityDiversity {
        QualityDiversity { quality, diversity }
    }

    fn config(theta: f64, window_size: usize, min_p: f64) -> CompassConfig {
        CompassConfig { theta, window_size, min_p }
    }

    #[test]
    fn validation_accepts_reference_configuration() {
        assert!(config(FRAC_PI_4, 5, 0.05).validate(3).is_ok());
    }

    #[test]
    fn validation_rejects_degenerate_inputs() {
        assert!(config(FRAC_PI_4, 5, 0.05).validate(1).is_err());
        assert!(config(FRAC_PI_4, 0, 0.05).validate(3).is_err());
        assert!(config(f64::NAN, 5, 0.05).validate(3).is_err());
        assert!(config(FRAC_PI_4, 5, 0.0).validate(3).is_err());
        assert!(config(FRAC_PI_4, 5, -0.1).validate(3).is_err());
        // min_p * N >= 1 makes the smoothing denominator non-positive.
        assert!(config(FRAC_PI_4, 5, 1.0 / 3.0).validate(3).is_err());
        assert!(config(FRAC_PI_4, 5, 0.5).validate(3).is_err());
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: CompassConfig =
            serde_json::from_str(r#"{"theta": 0.7853981633974483, "window_size": 5, "min_p": 0.05}"#)
                .unwrap();

        assert!(config.validate(3).is_ok());
        assert_relative_eq!(config.theta, FRAC_PI_4);
    }

    #[test]
    fn direction_is_unit_length() {
        let direction = config(FRAC_PI_4, 5, 0.05).direction();
        assert_relative_eq!(direction.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(direction.x, direction.y, epsilon = 1e-12);
    }

    #[test]
    fn tied_weights_produce_all_zero_awards() {
        let weights = vec![weight(1.0, 1.0); 3];
        let awards = compute_awards(&weights, &config(FRAC_PI_4, 5, 0.05).direction());

        for award in awards {
            assert_relative_eq!(award, 0.0);
        }
    }

    #[test]
    fn pure_quality_direction_orders_by_quality() {
        // theta = 0: diversity contributes nothing to the projection.
        let weights = vec![weight(2.0, 9.0), weight(4.0, 1.0), weight(1.0, 5.0)];
        let awards = compute_awards(&weights, &config(0.0, 5, 0.05).direction());

        assert_relative_eq!(awards[2], 0.0); // lowest quality after shift
        assert!(awards[1] > awards[0]);
        assert!(awards[0] > awards[2]);
    }

    #[test]
    fn non_positive_maximum_skips_normalization() {
        // All qualities non-positive: dividing by the maximum would either
        // divide by zero or flip the ordering.
        let weights = vec![weight(-2.0, 1.0), weight(-1.0, 2.0), weight(0.0, 4.0)];
        let awards = compute_awards(&weights, &config(0.0, 5, 0.05).direction());

        assert!(awards.iter().all(|a| a.is_finite()));
        // Ordering by quality is preserved under the pure-quality direction.
        assert_relative_eq!(awards[0], 0.0);
        assert!(awards[2] > awards[1]);
    }

    #[test]
    fn awards_are_shifted_non_negative_with_zero_minimum() {
        let weights = vec![weight(3.0, 0.5), weight(1.0, 2.0), weight(2.0, 1.0)];
        let awards = compute_awards(&weights, &config(FRAC_PI_4, 5, 0.05).direction());

        let min = awards.iter().copied().fold(f64::INFINITY, f64::min);
        assert_relative_eq!(min, 0.0);
        assert!(awards.iter().all(|&a| a >= 0.0));
    }
}
