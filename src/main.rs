//! `perio-risk` — score periodontal risk from six clinical inputs and plot it.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load presentation config ([`config::load_config`]).
//! 3. Collect the six inputs: defaults, then `--input` file, then flags ([`input`]).
//! 4. Classify each factor and aggregate the verdict ([`risk`]).
//! 5. Render the requested report ([`report`]).
//! 6. Optionally draw the radar chart (`--chart`, [`chart`]).

mod chart;
mod cli;
mod config;
mod input;
mod models;
mod report;
mod risk;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, ReportFormat};
use config::load_config;
use input::{load_assessment, warn_out_of_range};
use models::Assessment;
use report::AssessmentReport;
use risk::assess;

fn main() -> Result<()> {
    // Logs go to stderr so `--report json` stays clean on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    // Defaults, then input file, then flags
    let base = match &cli.input {
        Some(path) => load_assessment(path)?,
        None => Assessment::default(),
    };
    let assessment = cli.apply_overrides(base);
    debug!(?assessment, "inputs collected");
    warn_out_of_range(&assessment);

    let profile = assess(&assessment);
    let report = AssessmentReport::new(&assessment, &profile);

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&report, cli.verbose, cli.quiet)?,
        ReportFormat::Json => report::json::render(&report)?,
    }

    if let Some(path) = &cli.chart {
        chart::render::render(&report.chart, &report.title(), &config.chart, path)?;
        if !cli.quiet && matches!(cli.report, ReportFormat::Terminal) {
            eprintln!(" Chart written to {}", path.display());
        }
    }

    Ok(())
}
