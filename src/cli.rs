use std::path::PathBuf;

use clap::Parser;

use crate::models::{Assessment, SmokingCategory, SystemicRisk};

#[derive(Parser, Debug)]
#[command(
    name = "perio-risk",
    about = "Periodontal risk assessment with radar chart output",
    version
)]
pub struct Cli {
    /// Bleeding on probing, percent of sites (0-100)
    #[arg(long, value_name = "PCT", allow_negative_numbers = true)]
    pub bop: Option<f64>,

    /// Residual pockets of 5mm or deeper (0-15)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub pockets: Option<f64>,

    /// Teeth lost out of 28 (0-15)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub teeth_lost: Option<f64>,

    /// Bone loss / age factor (0.0-2.0)
    #[arg(long, value_name = "F", allow_negative_numbers = true)]
    pub bone_loss_age: Option<f64>,

    /// Systemic & genetic risk (e.g. diabetes, IL-1)
    #[arg(long, value_name = "RISK")]
    pub systemic: Option<SystemicArg>,

    /// Smoking habits
    #[arg(long, value_name = "HABIT")]
    pub smoking: Option<SmokingArg>,

    /// TOML file with assessment inputs; flags override its values
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file [default: ./.perio-risk/config.toml, fallback ~/.config/perio-risk/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Write the radar chart (.png or .svg); use without value to default to risk-chart.png
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "risk-chart.png")]
    pub chart: Option<PathBuf>,

    /// Show all factors (not just moderate/high contributors)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply measurement flags on top of `base`.
    pub fn apply_overrides(&self, base: Assessment) -> Assessment {
        Assessment {
            bop: self.bop.unwrap_or(base.bop),
            residual_pockets: self.pockets.unwrap_or(base.residual_pockets),
            teeth_lost: self.teeth_lost.unwrap_or(base.teeth_lost),
            bone_loss_age: self.bone_loss_age.unwrap_or(base.bone_loss_age),
            systemic: self.systemic.as_ref().map(Into::into).unwrap_or(base.systemic),
            smoking: self.smoking.as_ref().map(Into::into).unwrap_or(base.smoking),
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SystemicArg {
    None,
    Present,
}

impl From<&SystemicArg> for SystemicRisk {
    fn from(arg: &SystemicArg) -> Self {
        match arg {
            SystemicArg::None => SystemicRisk::None,
            SystemicArg::Present => SystemicRisk::Present,
        }
    }
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SmokingArg {
    /// Non-Smoker
    NonSmoker,
    /// Former Smoker (>5 years)
    Former,
    /// <10 Cigarettes/Day
    #[value(name = "under-10")]
    Under10,
    /// 10-19 Cigarettes/Day
    #[value(name = "10-to-19")]
    TenTo19,
    /// ≥20 Cigarettes/Day
    #[value(name = "20-plus")]
    TwentyPlus,
}

impl From<&SmokingArg> for SmokingCategory {
    fn from(arg: &SmokingArg) -> Self {
        match arg {
            SmokingArg::NonSmoker => SmokingCategory::NonSmoker,
            SmokingArg::Former => SmokingCategory::FormerSmoker,
            SmokingArg::Under10 => SmokingCategory::UnderTenPerDay,
            SmokingArg::TenTo19 => SmokingCategory::TenToNineteenPerDay,
            SmokingArg::TwentyPlus => SmokingCategory::TwentyPlusPerDay,
        }
    }
}
