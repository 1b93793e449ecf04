//! Funnel correction rules
//!
//! A rule maps the funnel's previous coordinate and the drop sample on the
//! same axis to the funnel's next coordinate. Axes are corrected
//! independently with the same function.

use serde::{Deserialize, Serialize};

/// The four classic funnel rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectionRule {
    /// Rule 1: leave the funnel over the target
    NoCorrection,
    /// Rule 2: move the funnel by the negative of the last deviation, from where it is
    RelativeToFunnel,
    /// Rule 3: place the funnel opposite the last landing point, measured from the target
    RelativeToTarget,
    /// Rule 4: place the funnel over the last landing point
    ChaseLanding,
}

impl CorrectionRule {
    /// All rules in experiment order
    pub const ALL: [CorrectionRule; 4] = [
        CorrectionRule::NoCorrection,
        CorrectionRule::RelativeToFunnel,
        CorrectionRule::RelativeToTarget,
        CorrectionRule::ChaseLanding,
    ];

    /// Next funnel coordinate given the previous one and the drop sample
    #[inline]
    pub fn correct(&self, prev: f64, sample: f64) -> f64 {
        match self {
            CorrectionRule::NoCorrection => 0.0,
            CorrectionRule::RelativeToFunnel => -sample,
            CorrectionRule::RelativeToTarget => -(prev + sample),
            CorrectionRule::ChaseLanding => prev + sample,
        }
    }

    /// 1-based rule number
    pub fn number(&self) -> u8 {
        match self {
            CorrectionRule::NoCorrection => 1,
            CorrectionRule::RelativeToFunnel => 2,
            CorrectionRule::RelativeToTarget => 3,
            CorrectionRule::ChaseLanding => 4,
        }
    }

    /// Plot title and image file stem, e.g. `rule_2`
    pub fn label(&self) -> String {
        format!("rule_{}", self.number())
    }

    pub fn description(&self) -> &'static str {
        match self {
            CorrectionRule::NoCorrection => "funnel stays over the target",
            CorrectionRule::RelativeToFunnel => "funnel moves by -deviation from its last position",
            CorrectionRule::RelativeToTarget => "funnel moves to -landing point, measured from the target",
            CorrectionRule::ChaseLanding => "funnel moves over the last landing point",
        }
    }
}

impl std::fmt::Display for CorrectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rule {} ({})", self.number(), self.description())
    }
}
