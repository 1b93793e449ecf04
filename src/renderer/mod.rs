//! Scatter plot rendering
//!
//! The simulation hands a `PlotDataset` to any `PlotRenderer`; `PngRenderer`
//! is the plotters-backed implementation used by the binary.

pub mod png;

pub use png::{PngRenderer, SERIES_COLORS, series_color};

use std::path::Path;

use crate::Point;
use crate::error::Result;
use crate::stats::DistanceStats;

/// One scatter series
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    pub label: String,
    pub points: &'a [Point],
}

/// Everything needed to draw one plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDataset<'a> {
    pub title: String,
    pub series: Vec<Series<'a>>,
    /// Aggregate over every point of every series
    pub stats: Option<DistanceStats>,
    /// Both axes span [-area_half_range, area_half_range]
    pub area_half_range: f64,
}

impl<'a> PlotDataset<'a> {
    /// Build a dataset with one series per sequence.
    ///
    /// Every series is labelled with the shared statistics plus its 1-based index.
    pub fn new(title: impl Into<String>, sequences: &[&'a [Point]], area_half_range: f64) -> Self {
        let stats = DistanceStats::compute(sequences.iter().copied());
        let series = sequences
            .iter()
            .enumerate()
            .map(|(i, &points)| Series {
                label: match &stats {
                    Some(stats) => stats.series_label(i),
                    None => format!("No drops ({})", i + 1),
                },
                points,
            })
            .collect();

        Self {
            title: title.into(),
            series,
            stats,
            area_half_range,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Draws a dataset and persists it at `path`.
///
/// Implementations must either write a complete image or return an error;
/// a failed render must not leave a partial file behind.
pub trait PlotRenderer {
    fn render(&mut self, plot: &PlotDataset<'_>, path: &Path) -> Result<()>;
}
