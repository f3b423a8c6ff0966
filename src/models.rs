use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Ordinal risk band assigned to a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low = 1,
    Moderate = 2,
    High = 3,
}

impl RiskLevel {
    /// Numeric score used on the chart's radial axis (1..=3).
    pub const fn score(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Two ascending cut points splitting a measurement into three bands.
///
/// `low_max < moderate_max` is assumed and not checked: the only pairs in use
/// are the constants on [`Measurement::thresholds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdPair {
    pub low_max: f64,
    pub moderate_max: f64,
}

impl ThresholdPair {
    pub const fn new(low_max: f64, moderate_max: f64) -> Self {
        Self {
            low_max,
            moderate_max,
        }
    }
}

impl std::fmt::Display for ThresholdPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} / <{}", self.low_max, self.moderate_max)
    }
}

/// The four numeric clinical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    BleedingOnProbing,
    ResidualPockets,
    TeethLost,
    BoneLossAge,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::BleedingOnProbing,
        Measurement::ResidualPockets,
        Measurement::TeethLost,
        Measurement::BoneLossAge,
    ];

    /// Fixed banding constants for this measurement.
    pub const fn thresholds(self) -> ThresholdPair {
        match self {
            Measurement::BleedingOnProbing => ThresholdPair::new(10.0, 25.0),
            Measurement::ResidualPockets => ThresholdPair::new(4.0, 8.0),
            Measurement::TeethLost => ThresholdPair::new(4.0, 8.0),
            Measurement::BoneLossAge => ThresholdPair::new(0.5, 1.0),
        }
    }

    /// Range the input form offers. Values outside it are still classified.
    pub const fn declared_range(self) -> (f64, f64) {
        match self {
            Measurement::BleedingOnProbing => (0.0, 100.0),
            Measurement::ResidualPockets => (0.0, 15.0),
            Measurement::TeethLost => (0.0, 15.0),
            Measurement::BoneLossAge => (0.0, 2.0),
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measurement::BleedingOnProbing => write!(f, "Bleeding on Probing (%)"),
            Measurement::ResidualPockets => write!(f, "Residual Pockets (≥5mm)"),
            Measurement::TeethLost => write!(f, "Teeth Lost (out of 28)"),
            Measurement::BoneLossAge => write!(f, "Bone Loss / Age Factor"),
        }
    }
}

/// Systemic or genetic risk (e.g. diabetes, IL-1 genotype).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemicRisk {
    #[default]
    None,
    Present,
}

impl std::fmt::Display for SystemicRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemicRisk::None => write!(f, "None"),
            SystemicRisk::Present => write!(f, "Present"),
        }
    }
}

impl FromStr for SystemicRisk {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "None" => Ok(SystemicRisk::None),
            "Present" => Ok(SystemicRisk::Present),
            other => bail!("unknown systemic risk category: {other:?}"),
        }
    }
}

/// Smoking habit categories offered by the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmokingCategory {
    #[default]
    #[serde(rename = "Non-Smoker")]
    NonSmoker,
    #[serde(rename = "Former Smoker (>5 years)")]
    FormerSmoker,
    #[serde(rename = "<10 Cigarettes/Day")]
    UnderTenPerDay,
    #[serde(rename = "10-19 Cigarettes/Day", alias = "10–19 Cigarettes/Day")]
    TenToNineteenPerDay,
    #[serde(rename = "≥20 Cigarettes/Day", alias = ">=20 Cigarettes/Day")]
    TwentyPlusPerDay,
}

impl SmokingCategory {
    pub const ALL: [SmokingCategory; 5] = [
        SmokingCategory::NonSmoker,
        SmokingCategory::FormerSmoker,
        SmokingCategory::UnderTenPerDay,
        SmokingCategory::TenToNineteenPerDay,
        SmokingCategory::TwentyPlusPerDay,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SmokingCategory::NonSmoker => "Non-Smoker",
            SmokingCategory::FormerSmoker => "Former Smoker (>5 years)",
            SmokingCategory::UnderTenPerDay => "<10 Cigarettes/Day",
            SmokingCategory::TenToNineteenPerDay => "10-19 Cigarettes/Day",
            SmokingCategory::TwentyPlusPerDay => "≥20 Cigarettes/Day",
        }
    }
}

impl std::fmt::Display for SmokingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SmokingCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        // ASCII spellings of the en-dash and ≥ labels
        let canonical = match label {
            "10–19 Cigarettes/Day" => "10-19 Cigarettes/Day",
            ">=20 Cigarettes/Day" => "≥20 Cigarettes/Day",
            other => other,
        };
        match SmokingCategory::ALL.into_iter().find(|c| c.label() == canonical) {
            Some(category) => Ok(category),
            None => bail!("unknown smoking category: {label:?}"),
        }
    }
}

/// One axis of the assessment, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskFactor {
    BleedingOnProbing,
    ResidualPockets,
    ToothLoss,
    BoneLossAge,
    SystemicRisk,
    Smoking,
}

impl RiskFactor {
    /// Fixed axis order; [`RiskVector`] entries line up with this.
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::BleedingOnProbing,
        RiskFactor::ResidualPockets,
        RiskFactor::ToothLoss,
        RiskFactor::BoneLossAge,
        RiskFactor::SystemicRisk,
        RiskFactor::Smoking,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RiskFactor::BleedingOnProbing => "BOP",
            RiskFactor::ResidualPockets => "Residual Pockets",
            RiskFactor::ToothLoss => "Tooth Loss",
            RiskFactor::BoneLossAge => "Bone Loss/Age",
            RiskFactor::SystemicRisk => "Systemic Risk",
            RiskFactor::Smoking => "Smoking",
        }
    }

    /// The numeric measurement behind this factor, if it has one.
    pub const fn measurement(self) -> Option<Measurement> {
        match self {
            RiskFactor::BleedingOnProbing => Some(Measurement::BleedingOnProbing),
            RiskFactor::ResidualPockets => Some(Measurement::ResidualPockets),
            RiskFactor::ToothLoss => Some(Measurement::TeethLost),
            RiskFactor::BoneLossAge => Some(Measurement::BoneLossAge),
            RiskFactor::SystemicRisk | RiskFactor::Smoking => None,
        }
    }
}

impl std::fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Six per-factor levels in [`RiskFactor::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskVector([RiskLevel; 6]);

impl RiskVector {
    pub const fn new(levels: [RiskLevel; 6]) -> Self {
        Self(levels)
    }

    /// Factors paired with their levels, in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskFactor, RiskLevel)> + '_ {
        RiskFactor::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        self.0.iter().filter(|l| **l == level).count()
    }
}

/// Overall category derived from a [`RiskVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallVerdict {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl std::fmt::Display for OverallVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallVerdict::LowRisk => write!(f, "Low Risk"),
            OverallVerdict::ModerateRisk => write!(f, "Moderate Risk"),
            OverallVerdict::HighRisk => write!(f, "High Risk"),
        }
    }
}

/// The six raw inputs of one assessment run.
///
/// Defaults match the starting position of the assessment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assessment {
    #[serde(default = "default_bop")]
    pub bop: f64,
    #[serde(default = "default_residual_pockets")]
    pub residual_pockets: f64,
    #[serde(default = "default_teeth_lost")]
    pub teeth_lost: f64,
    #[serde(default = "default_bone_loss_age")]
    pub bone_loss_age: f64,
    #[serde(default)]
    pub systemic: SystemicRisk,
    #[serde(default)]
    pub smoking: SmokingCategory,
}

fn default_bop() -> f64 {
    10.0
}

fn default_residual_pockets() -> f64 {
    4.0
}

fn default_teeth_lost() -> f64 {
    2.0
}

fn default_bone_loss_age() -> f64 {
    0.5
}

impl Default for Assessment {
    fn default() -> Self {
        Assessment {
            bop: default_bop(),
            residual_pockets: default_residual_pockets(),
            teeth_lost: default_teeth_lost(),
            bone_loss_age: default_bone_loss_age(),
            systemic: SystemicRisk::default(),
            smoking: SmokingCategory::default(),
        }
    }
}

impl Assessment {
    pub fn measurement(&self, kind: Measurement) -> f64 {
        match kind {
            Measurement::BleedingOnProbing => self.bop,
            Measurement::ResidualPockets => self.residual_pockets,
            Measurement::TeethLost => self.teeth_lost,
            Measurement::BoneLossAge => self.bone_loss_age,
        }
    }

    /// Human-readable input value for a factor, used by the reports.
    pub fn input_display(&self, factor: RiskFactor) -> String {
        match factor {
            RiskFactor::BleedingOnProbing => format!("{}%", self.bop),
            RiskFactor::ResidualPockets => self.residual_pockets.to_string(),
            RiskFactor::ToothLoss => self.teeth_lost.to_string(),
            RiskFactor::BoneLossAge => format!("{:.2}", self.bone_loss_age),
            RiskFactor::SystemicRisk => self.systemic.to_string(),
            RiskFactor::Smoking => self.smoking.to_string(),
        }
    }
}
