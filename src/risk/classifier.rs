use crate::models::{Measurement, RiskLevel, SmokingCategory, SystemicRisk, ThresholdPair};

/// Band a numeric measurement against a threshold pair.
///
/// Both cuts are strict `<`, so a value exactly on a threshold lands in the
/// higher band: `10.0` against `(10, 25)` is [`RiskLevel::Moderate`].
/// Any real number classifies; there is no range rejection.
pub fn classify_continuous(value: f64, thresholds: ThresholdPair) -> RiskLevel {
    if value < thresholds.low_max {
        RiskLevel::Low
    } else if value < thresholds.moderate_max {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Band a measurement against its fixed thresholds.
pub fn classify_measurement(kind: Measurement, value: f64) -> RiskLevel {
    classify_continuous(value, kind.thresholds())
}

/// An enumerated input with a fixed risk level per category.
pub trait CategoricalFactor: Copy {
    fn risk_level(self) -> RiskLevel;
}

impl CategoricalFactor for SystemicRisk {
    // Binary: there is no Moderate band for systemic risk.
    fn risk_level(self) -> RiskLevel {
        match self {
            SystemicRisk::None => RiskLevel::Low,
            SystemicRisk::Present => RiskLevel::High,
        }
    }
}

impl CategoricalFactor for SmokingCategory {
    fn risk_level(self) -> RiskLevel {
        match self {
            SmokingCategory::NonSmoker | SmokingCategory::FormerSmoker => RiskLevel::Low,
            SmokingCategory::UnderTenPerDay | SmokingCategory::TenToNineteenPerDay => {
                RiskLevel::Moderate
            }
            SmokingCategory::TwentyPlusPerDay => RiskLevel::High,
        }
    }
}

/// Look up the fixed level of a categorical input.
pub fn classify_categorical<C: CategoricalFactor>(value: C) -> RiskLevel {
    value.risk_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOP: ThresholdPair = ThresholdPair::new(10.0, 25.0);

    #[test]
    fn test_continuous_bands() {
        assert_eq!(classify_continuous(0.0, BOP), RiskLevel::Low);
        assert_eq!(classify_continuous(9.99, BOP), RiskLevel::Low);
        assert_eq!(classify_continuous(17.0, BOP), RiskLevel::Moderate);
        assert_eq!(classify_continuous(24.9, BOP), RiskLevel::Moderate);
        assert_eq!(classify_continuous(60.0, BOP), RiskLevel::High);
    }

    #[test]
    fn test_threshold_values_fall_into_higher_band() {
        assert_eq!(classify_continuous(10.0, BOP), RiskLevel::Moderate);
        assert_eq!(classify_continuous(25.0, BOP), RiskLevel::High);
        assert_eq!(
            classify_measurement(Measurement::BoneLossAge, 0.5),
            RiskLevel::Moderate
        );
        assert_eq!(
            classify_measurement(Measurement::BoneLossAge, 1.0),
            RiskLevel::High
        );
        assert_eq!(
            classify_measurement(Measurement::ResidualPockets, 8.0),
            RiskLevel::High
        );
    }

    #[test]
    fn test_out_of_range_values_still_classify() {
        assert_eq!(classify_continuous(-5.0, BOP), RiskLevel::Low);
        assert_eq!(classify_continuous(1e9, BOP), RiskLevel::High);
        assert_eq!(
            classify_measurement(Measurement::TeethLost, 20.0),
            RiskLevel::High
        );
    }

    #[test]
    fn test_fixed_thresholds_are_ascending() {
        for kind in Measurement::ALL {
            let t = kind.thresholds();
            assert!(t.low_max < t.moderate_max, "{kind:?} thresholds out of order");
        }
    }

    #[test]
    fn test_systemic_lookup() {
        let present: SystemicRisk = "Present".parse().unwrap();
        let none: SystemicRisk = "None".parse().unwrap();
        assert_eq!(classify_categorical(present), RiskLevel::High);
        assert_eq!(classify_categorical(none), RiskLevel::Low);
    }

    #[test]
    fn test_smoking_lookup() {
        let cases = [
            ("Non-Smoker", RiskLevel::Low),
            ("Former Smoker (>5 years)", RiskLevel::Low),
            ("<10 Cigarettes/Day", RiskLevel::Moderate),
            ("10-19 Cigarettes/Day", RiskLevel::Moderate),
            ("≥20 Cigarettes/Day", RiskLevel::High),
        ];
        for (label, expected) in cases {
            let category: SmokingCategory = label.parse().unwrap();
            assert_eq!(classify_categorical(category), expected, "{label}");
        }
    }
}
