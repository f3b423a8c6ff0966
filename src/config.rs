use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Root configuration structure, deserialized from `.perio-risk/config.toml`.
///
/// Only presentation is configurable; risk thresholds are fixed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Radar chart output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Opacity of the filled risk polygon, `0.0..=1.0`.
    pub fill_opacity: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 640,
            height: 640,
            fill_opacity: 0.3,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.perio-risk/config.toml`
/// 3. `~/.config/perio-risk/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".perio-risk").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("perio-risk").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using built-in defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;
    config
        .chart
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

impl ChartConfig {
    /// Reject settings the renderer cannot draw.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("chart size must be non-zero, got {}x{}", self.width, self.height);
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            bail!("chart.fill_opacity must be within 0.0..=1.0, got {}", self.fill_opacity);
        }
        Ok(())
    }
}
