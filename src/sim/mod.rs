//! Deterministic simulation module
//!
//! Sampling and the funnel recurrence live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Sample order is preserved (rules are stateful recurrences over it)
//! - No rendering or I/O beyond logging

pub mod funnel;
pub mod rule;
pub mod sample;

pub use funnel::{RuleRun, funnel_trajectory, offsets_by, run_rule};
pub use rule::CorrectionRule;
pub use sample::{SampleSet, generate_samples};
