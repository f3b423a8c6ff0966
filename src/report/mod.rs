//! Report renderers for a scored assessment.
//!
//! - [`terminal`] — colored summary box and factor table; respects `--verbose` / `--quiet`.
//! - [`json`] — the full [`AssessmentReport`] as pretty-printed JSON.

pub mod json;
pub mod terminal;

use serde::Serialize;

use crate::chart::RadarSeries;
use crate::models::{Assessment, OverallVerdict, RiskFactor, RiskLevel, ThresholdPair};
use crate::risk::aggregator::RiskCounts;
use crate::risk::RiskProfile;

/// One row of the report: a factor, what was entered, and how it scored.
#[derive(Debug, Clone, Serialize)]
pub struct FactorReport {
    pub factor: RiskFactor,
    pub label: &'static str,
    pub input: String,
    /// `None` for categorical factors.
    pub thresholds: Option<ThresholdPair>,
    pub level: RiskLevel,
    pub score: u8,
}

/// Everything the presentation layer needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub inputs: Assessment,
    pub factors: Vec<FactorReport>,
    pub counts: RiskCounts,
    pub verdict: OverallVerdict,
    pub chart: RadarSeries,
}

impl AssessmentReport {
    pub fn new(inputs: &Assessment, profile: &RiskProfile) -> Self {
        let factors = profile
            .levels
            .iter()
            .map(|(factor, level)| FactorReport {
                factor,
                label: factor.label(),
                input: inputs.input_display(factor),
                thresholds: factor.measurement().map(|m| m.thresholds()),
                level,
                score: level.score(),
            })
            .collect();

        AssessmentReport {
            inputs: inputs.clone(),
            factors,
            counts: profile.counts,
            verdict: profile.verdict,
            chart: RadarSeries::from_vector(&profile.levels),
        }
    }

    /// Chart title shown above the radar plot.
    pub fn title(&self) -> String {
        format!("Periodontal Risk Assessment: {}", self.verdict)
    }
}
