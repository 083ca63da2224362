//! Bounded reward histories with rolling-mean weight estimates
//!
//! Each operator owns a fixed-capacity FIFO of quality-diversity deltas.
//! The derived weight is the element-wise simple moving average over the
//! window, so the estimate adapts at a rate controlled by the window size:
//! larger windows adapt slower but are more stable under noisy rewards.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use crate::selection::qd::QualityDiversity;

/// Bounded FIFO of attributed reward deltas for a single operator
///
/// Eviction is strictly oldest-first on overflow; the window never exceeds
/// its configured capacity.
#[derive(Debug, Clone)]
pub struct RewardWindow {
    deltas: VecDeque<QualityDiversity>,
    capacity: usize,
}

impl RewardWindow {
    /// Creates an empty window with the given capacity (≥ 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            deltas: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a delta, evicting the oldest entry when the window is full.
    pub fn push(&mut self, delta: QualityDiversity) {
        if self.deltas.len() == self.capacity {
            self.deltas.pop_front();
        }
        self.deltas.push_back(delta);
    }

    /// Element-wise mean over the current window contents.
    ///
    /// Returns `None` for an empty window; the engine keeps the neutral
    /// prior weight until the first attributed reward arrives.
    pub fn mean(&self) -> Option<QualityDiversity> {
        if self.deltas.is_empty() {
            return None;
        }

        let n = self.deltas.len() as f64;
        let (quality_sum, diversity_sum) = self
            .deltas
            .iter()
            .fold((0.0, 0.0), |(q, d), delta| (q + delta.quality, d + delta.diversity));

        Some(QualityDiversity {
            quality: quality_sum / n,
            diversity: diversity_sum / n,
        })
    }

    /// Number of deltas currently held.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Whether the window holds no deltas yet.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Iterates the window contents oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &QualityDiversity> {
        self.deltas.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn delta(quality: f64, diversity: f64) -> QualityDiversity {
        QualityDiversity { quality, diversity }
    }

    #[test]
    fn empty_window_has_no_mean() {
        let window = RewardWindow::new(5);
        assert!(window.mean().is_none());
        assert!(window.is_empty());
    }

    #[test]
    fn mean_is_element_wise() {
        let mut window = RewardWindow::new(5);
        window.push(delta(2.0, -1.0));
        window.push(delta(4.0, 3.0));

        let mean = window.mean().unwrap();
        assert_relative_eq!(mean.quality, 3.0);
        assert_relative_eq!(mean.diversity, 1.0);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let capacity = 4;
        let extra = 3;
        let mut window = RewardWindow::new(capacity);

        for i in 0..(capacity + extra) {
            window.push(delta(i as f64, 0.0));
        }

        assert_eq!(window.len(), capacity);
        // The earliest `extra` entries are gone, in insertion order.
        let remaining: Vec<f64> = window.iter().map(|d| d.quality).collect();
        assert_eq!(remaining, vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn mean_tracks_window_after_eviction() {
        let mut window = RewardWindow::new(2);
        window.push(delta(100.0, 100.0));
        window.push(delta(1.0, 2.0));
        window.push(delta(3.0, 4.0));

        let mean = window.mean().unwrap();
        assert_relative_eq!(mean.quality, 2.0);
        assert_relative_eq!(mean.diversity, 3.0);
    }
}
