//! Experiment configuration
//!
//! The binary always runs with `ExperimentConfig::default()`, which mirrors
//! the constants in `crate::consts`. Other values exist for tests and
//! library callers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Which plots a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlotMode {
    /// One plot per rule
    PerRule,
    /// One plot per rule plus a combined plot of all rules
    #[default]
    Combined,
}

impl PlotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotMode::PerRule => "per-rule",
            PlotMode::Combined => "combined",
        }
    }

    /// Whether the combined `all_in` plot is rendered
    pub fn renders_combined(&self) -> bool {
        matches!(self, PlotMode::Combined)
    }
}

/// Parameters of one experiment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of marbles dropped
    pub sample_count: usize,
    /// Standard deviation of drop scatter on each axis
    pub std_dev: f64,

    // === Plotting ===
    /// Axes span [-area_half_range, area_half_range]
    pub area_half_range: f64,
    /// Image size in pixels (width, height)
    pub image_size: (u32, u32),
    /// Marker diameter in pixels
    pub marker_size: u32,
    /// Directory images are written to
    pub output_dir: PathBuf,
    pub plot_mode: PlotMode,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sample_count: LAUNCHES,
            std_dev: DROP_STD_DEV,

            area_half_range: AREA_MAX_SIZE,
            image_size: (IMAGE_WIDTH, IMAGE_HEIGHT),
            marker_size: MARKER_SIZE,
            output_dir: PathBuf::from("."),
            plot_mode: PlotMode::default(),
        }
    }
}

impl ExperimentConfig {
    /// Default configuration writing images into `dir`
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Reject values the sampler or renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "std_dev must be finite and non-negative, got {}",
                self.std_dev
            )));
        }
        if !self.area_half_range.is_finite() || self.area_half_range <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "area_half_range must be finite and positive, got {}",
                self.area_half_range
            )));
        }
        if self.image_size.0 == 0 || self.image_size.1 == 0 {
            return Err(Error::InvalidConfig(format!(
                "image_size must be non-zero, got {}x{}",
                self.image_size.0, self.image_size.1
            )));
        }
        if self.marker_size == 0 {
            return Err(Error::InvalidConfig("marker_size must be non-zero".into()));
        }
        Ok(())
    }

    /// Path of the image for a plot titled `title`
    pub fn image_path(&self, title: &str) -> PathBuf {
        self.output_dir.join(format!("{title}.{IMAGE_EXTENSION}"))
    }
}
