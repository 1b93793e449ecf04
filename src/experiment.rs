//! Full experiment run
//!
//! One sample set, four rules, one plot per rule and optionally the combined
//! `all_in` plot. Any render failure aborts the run.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::consts::ALL_IN_TITLE;
use crate::error::Result;
use crate::renderer::{PlotDataset, PlotRenderer};
use crate::settings::ExperimentConfig;
use crate::sim::{CorrectionRule, RuleRun, SampleSet, generate_samples, run_rule};
use crate::stats::DistanceStats;

/// A configured, seeded experiment
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
    seed: u64,
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub seed: u64,
    pub samples: SampleSet,
    /// One run per rule, in rule order
    pub runs: Vec<RuleRun>,
    /// Statistics over every rule's offsets together
    pub combined_stats: Option<DistanceStats>,
    /// Images written, in render order
    pub images: Vec<PathBuf>,
}

/// Per-rule line of the JSON summary
#[derive(Debug, Serialize)]
struct RuleSummary {
    rule: u8,
    stats: Option<DistanceStats>,
    final_funnel: Point,
}

impl ExperimentReport {
    pub fn run_for(&self, rule: CorrectionRule) -> Option<&RuleRun> {
        self.runs.iter().find(|run| run.rule == rule)
    }

    /// Compact JSON: seed plus per-rule statistics
    pub fn summary_json(&self) -> serde_json::Result<String> {
        let rules: Vec<RuleSummary> = self
            .runs
            .iter()
            .map(|run| RuleSummary {
                rule: run.rule.number(),
                stats: run.stats,
                final_funnel: run.final_funnel(),
            })
            .collect();
        serde_json::to_string(&serde_json::json!({
            "seed": self.seed,
            "samples": self.samples.len(),
            "rules": rules,
            "combined": self.combined_stats,
        }))
    }
}

impl Experiment {
    pub fn new(config: ExperimentConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Draw the sample set from the seed, then run every rule
    pub fn run<R: PlotRenderer + ?Sized>(&self, renderer: &mut R) -> Result<ExperimentReport> {
        log::info!(
            "Dropping {} marbles (seed {}, std dev {}, {} plots)",
            self.config.sample_count,
            self.seed,
            self.config.std_dev,
            self.config.plot_mode.as_str()
        );

        let mut rng = Pcg32::seed_from_u64(self.seed);
        let samples = generate_samples(&mut rng, self.config.sample_count, self.config.std_dev)?;
        self.run_with_samples(samples, renderer)
    }

    /// Run every rule over an existing sample set
    pub fn run_with_samples<R: PlotRenderer + ?Sized>(
        &self,
        samples: SampleSet,
        renderer: &mut R,
    ) -> Result<ExperimentReport> {
        self.config.validate()?;

        let mut runs = Vec::with_capacity(CorrectionRule::ALL.len());
        let mut images = Vec::new();

        for rule in CorrectionRule::ALL {
            let run = run_rule(&samples, rule);
            images.push(self.render(renderer, &rule.label(), &[run.offsets.as_slice()])?);
            match &run.stats {
                Some(stats) => log::info!("{rule}: {}", stats.summary()),
                None => log::info!("{rule}: no drops"),
            }
            runs.push(run);
        }

        let sequences: Vec<&[Point]> = runs.iter().map(|run| run.offsets.as_slice()).collect();
        let combined_stats = DistanceStats::compute(sequences.iter().copied());
        if self.config.plot_mode.renders_combined() {
            images.push(self.render(renderer, ALL_IN_TITLE, &sequences)?);
        }

        let report = ExperimentReport {
            seed: self.seed,
            samples,
            runs,
            combined_stats,
            images,
        };

        if let Ok(json) = report.summary_json() {
            log::debug!("Report: {json}");
        }

        Ok(report)
    }

    fn render<R: PlotRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        title: &str,
        sequences: &[&[Point]],
    ) -> Result<PathBuf> {
        let plot = PlotDataset::new(title, sequences, self.config.area_half_range);
        let path = self.config.image_path(title);
        if let Err(e) = renderer.render(&plot, &path) {
            log::error!("Rendering {title} failed: {e}");
            return Err(e);
        }
        Ok(path)
    }
}
