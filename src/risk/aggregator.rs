use serde::Serialize;

use crate::models::{OverallVerdict, RiskLevel, RiskVector};

/// Number of High and Moderate factors in a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub high: usize,
    pub moderate: usize,
}

impl RiskCounts {
    pub fn of(levels: &RiskVector) -> Self {
        Self {
            high: levels.count(RiskLevel::High),
            moderate: levels.count(RiskLevel::Moderate),
        }
    }
}

/// Derive the overall verdict from six factor levels.
///
/// First match wins:
/// 1. two or more High factors → High Risk
/// 2. two or more Moderate factors → Moderate Risk
/// 3. otherwise → Low Risk
///
/// A single High factor on its own does not raise the verdict.
pub fn aggregate(levels: &RiskVector) -> OverallVerdict {
    verdict_for(RiskCounts::of(levels))
}

fn verdict_for(counts: RiskCounts) -> OverallVerdict {
    if counts.high >= 2 {
        OverallVerdict::HighRisk
    } else if counts.moderate >= 2 {
        OverallVerdict::ModerateRisk
    } else {
        OverallVerdict::LowRisk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel::{High, Low, Moderate};

    fn vector(levels: [RiskLevel; 6]) -> RiskVector {
        RiskVector::new(levels)
    }

    #[test]
    fn test_two_highs_is_high_risk() {
        assert_eq!(
            aggregate(&vector([High, High, Low, Low, Low, Low])),
            OverallVerdict::HighRisk
        );
    }

    #[test]
    fn test_single_high_alone_is_low_risk() {
        assert_eq!(
            aggregate(&vector([High, Low, Low, Low, Low, Low])),
            OverallVerdict::LowRisk
        );
        // one High plus one Moderate still falls through
        assert_eq!(
            aggregate(&vector([High, Moderate, Low, Low, Low, Low])),
            OverallVerdict::LowRisk
        );
    }

    #[test]
    fn test_two_moderates_is_moderate_risk() {
        assert_eq!(
            aggregate(&vector([Moderate, Moderate, Low, Low, Low, Low])),
            OverallVerdict::ModerateRisk
        );
    }

    #[test]
    fn test_all_low() {
        assert_eq!(aggregate(&vector([Low; 6])), OverallVerdict::LowRisk);
    }

    #[test]
    fn test_high_rule_takes_priority() {
        assert_eq!(
            aggregate(&vector([High, High, Moderate, Moderate, Moderate, Low])),
            OverallVerdict::HighRisk
        );
    }

    #[test]
    fn test_deterministic() {
        let v = vector([Moderate, High, Low, Moderate, High, Low]);
        assert_eq!(aggregate(&v), aggregate(&v));
        assert_eq!(RiskCounts::of(&v), RiskCounts { high: 2, moderate: 2 });
    }
}
