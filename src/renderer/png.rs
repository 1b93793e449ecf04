//! PNG scatter plots via plotters' bitmap backend

use std::error::Error as StdError;
use std::fs;
use std::path::Path;

use plotters::prelude::*;

use super::{PlotDataset, PlotRenderer};
use crate::error::{Error, Result};
use crate::settings::ExperimentConfig;

/// Marker fill colours, cycled per series
pub const SERIES_COLORS: [RGBColor; 5] = [GREEN, RED, BLUE, YELLOW, MAGENTA];

/// Fill colour for the series at 0-based `index`
pub fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Renders scatter plots to PNG files
#[derive(Debug, Clone)]
pub struct PngRenderer {
    /// Image size in pixels (width, height)
    pub image_size: (u32, u32),
    /// Marker diameter in pixels
    pub marker_size: u32,
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self::from_config(&ExperimentConfig::default())
    }
}

impl PngRenderer {
    pub fn from_config(config: &ExperimentConfig) -> Self {
        Self {
            image_size: config.image_size,
            marker_size: config.marker_size,
        }
    }

    fn draw(&self, plot: &PlotDataset<'_>, path: &Path) -> std::result::Result<(), Box<dyn StdError>> {
        let root = BitMapBackend::new(path, self.image_size).into_drawing_area();
        root.fill(&WHITE)?;

        let (width, height) = self.image_size;
        let chart_height = height.saturating_sub(legend_height(plot.series.len())).max(height / 2);
        let (chart_area, legend_area) = root.split_vertically(chart_height);

        let range = plot.area_half_range;
        let mut chart = ChartBuilder::on(&chart_area)
            .caption(&plot.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(-range..range, -range..range)?;

        chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

        let radius = self.marker_radius();
        for (i, series) in plot.series.iter().enumerate() {
            let color = series_color(i);
            chart.draw_series(series.points.iter().map(|p| {
                EmptyElement::at((p.x, p.y))
                    + Circle::new((0, 0), radius, color.filled())
                    + Circle::new((0, 0), radius, BLACK.stroke_width(1))
            }))?;
        }

        // Legend sits below the chart so long labels never cover drops
        let left = (width / 2).saturating_sub(LEGEND_TEXT_WIDTH / 2) as i32;
        for (i, series) in plot.series.iter().enumerate() {
            let y = (LEGEND_PADDING + LEGEND_ROW_HEIGHT * i as u32 + LEGEND_ROW_HEIGHT / 2) as i32;
            legend_area.draw(&Circle::new((left, y), radius, series_color(i).filled()))?;
            legend_area.draw(&Circle::new((left, y), radius, BLACK.stroke_width(1)))?;
            legend_area.draw(&Text::new(
                series.label.as_str(),
                (left + 2 * radius as i32 + 8, y - 8),
                ("sans-serif", 16),
            ))?;
        }

        root.present()?;
        Ok(())
    }

    fn marker_radius(&self) -> u32 {
        (self.marker_size / 2).max(1)
    }
}

const LEGEND_ROW_HEIGHT: u32 = 22;
const LEGEND_PADDING: u32 = 8;
const LEGEND_TEXT_WIDTH: u32 = 320;

/// Pixel height of the legend strip for `series_count` entries
pub fn legend_height(series_count: usize) -> u32 {
    LEGEND_ROW_HEIGHT * series_count as u32 + 2 * LEGEND_PADDING
}

impl PlotRenderer for PngRenderer {
    fn render(&mut self, plot: &PlotDataset<'_>, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(Error::render(
                    path,
                    format!("output directory {} does not exist", dir.display()),
                ));
            }
        }

        // The backend is dropped inside draw(), so the file handle is closed here either way
        if let Err(e) = self.draw(plot, path) {
            if path.is_file() {
                if let Err(rm) = fs::remove_file(path) {
                    log::warn!("Could not remove partial image {}: {}", path.display(), rm);
                }
            }
            return Err(Error::render(path, e));
        }

        log::debug!(
            "Rendered {} ({} series, {} points) to {}",
            plot.title,
            plot.series.len(),
            plot.point_count(),
            path.display()
        );
        Ok(())
    }
}
