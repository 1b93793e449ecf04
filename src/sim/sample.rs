//! Natural drop scatter
//!
//! Every marble would land at `sample_i` if the funnel sat exactly over the
//! target. The set is drawn once per run and shared by every rule.

use std::ops::Index;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{Error, Result};

/// Ordered, read-only drop samples
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSet {
    points: Vec<Point>,
}

impl SampleSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for SampleSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl Index<usize> for SampleSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Draw `count` points with independent N(0, std_dev) coordinates.
///
/// x is drawn before y for each point. Each point is logged as
/// `Point[<n>] x = <x> : y = <y>` with a 1-based index.
pub fn generate_samples<R: Rng + ?Sized>(rng: &mut R, count: usize, std_dev: f64) -> Result<SampleSet> {
    // rand_distr only rejects non-finite values; a negative one would mirror the samples
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "drop scatter std_dev must be finite and non-negative, got {std_dev}"
        )));
    }
    let normal = Normal::new(0.0, std_dev)
        .map_err(|e| Error::InvalidConfig(format!("drop scatter std_dev {std_dev}: {e}")))?;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x = normal.sample(rng);
        let y = normal.sample(rng);
        let point = Point::new(x, y);
        log::info!("{}", sample_line(i, point));
        points.push(point);
    }

    Ok(SampleSet::new(points))
}

/// Log line for the sample at 0-based `index`
pub fn sample_line(index: usize, point: Point) -> String {
    format!("Point[{}] x = {:.2} : y = {:.2}", index + 1, point.x, point.y)
}
