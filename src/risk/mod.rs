//! Risk scoring core: per-factor classification and overall aggregation.
//!
//! - [`classifier`] — bands numeric measurements against fixed thresholds and
//!   maps categorical inputs to their fixed levels.
//! - [`aggregator`] — counts High / Moderate factors and derives the verdict.

pub mod aggregator;
pub mod classifier;

use serde::Serialize;
use tracing::debug;

use crate::models::{Assessment, Measurement, OverallVerdict, RiskVector};
use aggregator::{aggregate, RiskCounts};
use classifier::{classify_categorical, classify_measurement};

/// Result of scoring one [`Assessment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskProfile {
    pub levels: RiskVector,
    pub counts: RiskCounts,
    pub verdict: OverallVerdict,
}

/// Classify every factor of `assessment` and aggregate the result.
pub fn assess(assessment: &Assessment) -> RiskProfile {
    let [bop, pockets, teeth, bone_loss] =
        Measurement::ALL.map(|kind| classify_measurement(kind, assessment.measurement(kind)));

    let levels = RiskVector::new([
        bop,
        pockets,
        teeth,
        bone_loss,
        classify_categorical(assessment.systemic),
        classify_categorical(assessment.smoking),
    ]);
    let counts = RiskCounts::of(&levels);
    let verdict = aggregate(&levels);

    debug!(?levels, high = counts.high, moderate = counts.moderate, %verdict, "assessment scored");

    RiskProfile {
        levels,
        counts,
        verdict,
    }
}
