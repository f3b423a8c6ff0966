use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::{Assessment, Measurement};

/// Read an assessment from a TOML file.
///
/// Categorical values use their display labels
/// (`smoking = "10-19 Cigarettes/Day"`); an unrecognized label fails the load.
/// Missing keys take the form defaults.
pub fn load_assessment(path: &Path) -> Result<Assessment> {
    debug!(path = %path.display(), "loading assessment input");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid assessment input {}", path.display()))
}

/// Log measurements outside the range the input form offers.
///
/// Such values are still scored; this only surfaces likely typos.
pub fn warn_out_of_range(assessment: &Assessment) -> usize {
    let mut flagged = 0;
    for kind in Measurement::ALL {
        let value = assessment.measurement(kind);
        let (min, max) = kind.declared_range();
        if !(min..=max).contains(&value) {
            warn!(measurement = %kind, value, min, max, "measurement outside expected range");
            flagged += 1;
        }
    }
    flagged
}
