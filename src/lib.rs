//! Hopper Funnel - Deming's funnel experiment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sample generation, correction rules, funnel recurrence)
//! - `stats`: Distance-from-target statistics
//! - `renderer`: Scatter plot rendering to PNG
//! - `experiment`: Runs all rules over one shared sample set
//! - `settings`: Experiment configuration

pub mod error;
pub mod experiment;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stats;

pub use error::{Error, Result};
pub use experiment::{Experiment, ExperimentReport};
pub use settings::{ExperimentConfig, PlotMode};

/// A marble landing position or funnel position, relative to the target
pub type Point = glam::DVec2;

/// Experiment constants
pub mod consts {
    /// Marbles dropped per run
    pub const LAUNCHES: usize = 100;
    /// Standard deviation of the natural drop scatter (per axis)
    pub const DROP_STD_DEV: f64 = 30.0;

    /// Plot axes span [-AREA_MAX_SIZE, AREA_MAX_SIZE] on both x and y
    pub const AREA_MAX_SIZE: f64 = 200.0;
    /// Output image dimensions in pixels
    pub const IMAGE_WIDTH: u32 = 800;
    pub const IMAGE_HEIGHT: u32 = 800;
    /// Marker diameter in pixels
    pub const MARKER_SIZE: u32 = 10;

    /// Output image format (file extension)
    pub const IMAGE_EXTENSION: &str = "png";
    /// Title of the plot holding every rule's offsets
    pub const ALL_IN_TITLE: &str = "all_in";
}

/// Euclidean distance from the target (origin)
#[inline]
pub fn distance_from_target(p: Point) -> f64 {
    p.length()
}
