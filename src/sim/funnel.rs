//! Funnel recurrence
//!
//! ```text
//! funnel_0      = (0, 0)
//! offset_i      = funnel_{i-1} + sample_i
//! funnel_i.axis = f(funnel_{i-1}.axis, sample_i.axis)
//! ```

use serde::{Deserialize, Serialize};

use super::rule::CorrectionRule;
use super::sample::SampleSet;
use crate::Point;
use crate::stats::DistanceStats;

/// One drop: where the marble landed and where the funnel moved afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
struct Landing {
    offset: Point,
    funnel_after: Point,
}

fn drops<'a, F>(samples: &'a [Point], f: F) -> impl Iterator<Item = Landing> + 'a
where
    F: Fn(f64, f64) -> f64 + 'a,
{
    samples.iter().scan(Point::ZERO, move |funnel, &sample| {
        let offset = *funnel + sample;
        *funnel = Point::new(f(funnel.x, sample.x), f(funnel.y, sample.y));
        Some(Landing {
            offset,
            funnel_after: *funnel,
        })
    })
}

/// Landing positions for an arbitrary per-axis correction function
pub fn offsets_by<F>(samples: &[Point], f: F) -> Vec<Point>
where
    F: Fn(f64, f64) -> f64,
{
    drops(samples, f).map(|d| d.offset).collect()
}

/// Funnel position after each drop
pub fn funnel_trajectory(samples: &[Point], rule: CorrectionRule) -> Vec<Point> {
    drops(samples, move |prev, s| rule.correct(prev, s))
        .map(|d| d.funnel_after)
        .collect()
}

/// Result of running one rule over the shared sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRun {
    pub rule: CorrectionRule,
    /// Landing positions relative to the target, one per sample
    pub offsets: Vec<Point>,
    /// Funnel position after each drop
    pub funnel_positions: Vec<Point>,
    /// Distance statistics of `offsets` (None for an empty sample set)
    pub stats: Option<DistanceStats>,
}

impl RuleRun {
    /// Funnel position after the last drop (origin if nothing was dropped)
    pub fn final_funnel(&self) -> Point {
        self.funnel_positions.last().copied().unwrap_or(Point::ZERO)
    }
}

/// Run `rule` over `samples`
pub fn run_rule(samples: &SampleSet, rule: CorrectionRule) -> RuleRun {
    let (offsets, funnel_positions): (Vec<Point>, Vec<Point>) =
        drops(samples.points(), move |prev, s| rule.correct(prev, s))
            .map(|d| (d.offset, d.funnel_after))
            .unzip();
    let stats = DistanceStats::compute([offsets.as_slice()]);

    RuleRun {
        rule,
        offsets,
        funnel_positions,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scenario() -> SampleSet {
        SampleSet::new(vec![
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(-10.0, 0.0),
        ])
    }

    fn samples_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..120)
            .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn test_scenario_rule_1() {
        let run = run_rule(&scenario(), CorrectionRule::NoCorrection);
        assert_eq!(run.offsets, scenario().points().to_vec());
        assert_eq!(run.final_funnel(), Point::ZERO);
    }

    #[test]
    fn test_scenario_rule_4() {
        let run = run_rule(&scenario(), CorrectionRule::ChaseLanding);
        assert_eq!(
            run.offsets,
            vec![
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
        assert_eq!(run.final_funnel(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_scenario_rules_2_and_3() {
        let rule2 = run_rule(&scenario(), CorrectionRule::RelativeToFunnel);
        assert_eq!(
            rule2.offsets,
            vec![
                Point::new(10.0, 0.0),
                Point::new(-10.0, 10.0),
                Point::new(-10.0, -10.0),
            ]
        );

        // funnel: (0,0) -> (-10,0) -> (10,-10) -> (0,10)
        let rule3 = run_rule(&scenario(), CorrectionRule::RelativeToTarget);
        assert_eq!(
            rule3.offsets,
            vec![
                Point::new(10.0, 0.0),
                Point::new(-10.0, 10.0),
                Point::new(0.0, -10.0),
            ]
        );
        assert_eq!(rule3.funnel_positions[1], Point::new(10.0, -10.0));
        assert_eq!(rule3.final_funnel(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_empty_samples() {
        let run = run_rule(&SampleSet::default(), CorrectionRule::ChaseLanding);
        assert!(run.offsets.is_empty());
        assert!(run.stats.is_none());
        assert_eq!(run.final_funnel(), Point::ZERO);
    }

    #[test]
    fn test_closure_matches_enum() {
        let samples = scenario();
        let by_closure = offsets_by(samples.points(), |prev, s| -(prev + s));
        let by_rule = run_rule(&samples, CorrectionRule::RelativeToTarget).offsets;
        assert_eq!(by_closure, by_rule);
    }

    #[test]
    fn test_axes_are_independent() {
        // A y-only sample set must never move the funnel along x
        let samples: Vec<Point> = (1..=10).map(|i| Point::new(0.0, i as f64)).collect();
        for rule in CorrectionRule::ALL {
            assert!(funnel_trajectory(&samples, rule).iter().all(|p| p.x == 0.0));
        }
    }

    proptest! {
        #[test]
        fn prop_first_offset_is_first_sample(samples in samples_strategy()) {
            let set = SampleSet::new(samples.clone());
            for rule in CorrectionRule::ALL {
                let run = run_rule(&set, rule);
                prop_assert_eq!(run.offsets.len(), samples.len());
                prop_assert_eq!(run.offsets[0], samples[0]);
            }
        }

        #[test]
        fn prop_rule_1_never_moves(samples in samples_strategy()) {
            let run = run_rule(&SampleSet::new(samples.clone()), CorrectionRule::NoCorrection);
            prop_assert_eq!(&run.offsets, &samples);
            prop_assert!(run.funnel_positions.iter().all(|p| *p == Point::ZERO));
        }

        #[test]
        fn prop_rule_2_funnel_negates_previous_sample(samples in samples_strategy()) {
            let run = run_rule(&SampleSet::new(samples.clone()), CorrectionRule::RelativeToFunnel);
            for (funnel, sample) in run.funnel_positions.iter().zip(&samples) {
                prop_assert_eq!(*funnel, -*sample);
            }
        }

        #[test]
        fn prop_rule_4_funnel_is_running_sum(samples in samples_strategy()) {
            let trajectory = funnel_trajectory(&samples, CorrectionRule::ChaseLanding);
            let mut sum = Point::ZERO;
            for (i, sample) in samples.iter().enumerate() {
                sum += *sample;
                prop_assert_eq!(trajectory[i], sum);
            }
        }

        #[test]
        fn prop_offset_is_previous_funnel_plus_sample(samples in samples_strategy()) {
            for rule in CorrectionRule::ALL {
                let run = run_rule(&SampleSet::new(samples.clone()), rule);
                let mut funnel = Point::ZERO;
                for i in 0..samples.len() {
                    prop_assert_eq!(run.offsets[i], funnel + samples[i]);
                    funnel = run.funnel_positions[i];
                }
            }
        }

        #[test]
        fn prop_runs_are_deterministic(samples in samples_strategy()) {
            let set = SampleSet::new(samples);
            for rule in CorrectionRule::ALL {
                prop_assert_eq!(run_rule(&set, rule), run_rule(&set, rule));
            }
        }
    }
}
