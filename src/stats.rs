//! Distance-from-target statistics
//!
//! Aggregated across every point of every supplied sequence, so a combined
//! plot reports one set of numbers for all of its series.

use serde::{Deserialize, Serialize};

use crate::{Point, distance_from_target};

/// Max / min / mean Euclidean distance from the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceStats {
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Number of points aggregated
    pub count: usize,
}

impl DistanceStats {
    /// Statistics over all points in `sequences`, or None if there are no points
    pub fn compute<'a, I>(sequences: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for point in sequences.into_iter().flatten() {
            let distance = distance_from_target(*point);
            max = max.max(distance);
            min = min.min(distance);
            sum += distance;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        // Summation rounding can push the mean a few ULPs past the extremes
        let mean = (sum / count as f64).clamp(min, max);

        Some(Self {
            max,
            min,
            mean,
            count,
        })
    }

    /// `Max <max> Min <min> Avg <mean>`, two decimals each
    pub fn summary(&self) -> String {
        format!("Max {:.2} Min {:.2} Avg {:.2}", self.max, self.min, self.mean)
    }

    /// Legend label for the series at 0-based `index`
    pub fn series_label(&self, index: usize) -> String {
        format!("{} ({})", self.summary(), index + 1)
    }
}
