use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::{polar_to_xy, RadarSeries, RADIAL_TICKS};
use crate::config::ChartConfig;

const FONT: &str = "sans-serif";
const RING_SEGMENTS: usize = 96;
// Tick labels sit between the first two spokes
const TICK_LABEL_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// Output backend, picked from the chart file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}

/// Render `series` as a filled radar polygon and write it to `path`.
pub fn render(series: &RadarSeries, title: &str, config: &ChartConfig, path: &Path) -> Result<()> {
    config.validate()?;
    let size = (config.width, config.height);
    let format = ChartFormat::from_path(path);

    match format {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(&root, series, title, config)?;
            root.present()
                .with_context(|| format!("failed to write chart to {}", path.display()))?;
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(&root, series, title, config)?;
            root.present()
                .with_context(|| format!("failed to write chart to {}", path.display()))?;
        }
    }

    info!(path = %path.display(), ?format, "chart written");
    Ok(())
}

fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &RadarSeries,
    title: &str,
    config: &ChartConfig,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT, 22))?;

    let outer = RADIAL_TICKS[RADIAL_TICKS.len() - 1].0;
    let extent = outer * 1.4;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    let grid = BLACK.mix(0.2);

    for (radius, label) in RADIAL_TICKS {
        let ring: Vec<(f64, f64)> = (0..=RING_SEGMENTS)
            .map(|i| std::f64::consts::TAU * i as f64 / RING_SEGMENTS as f64)
            .map(|theta| polar_to_xy(theta, radius))
            .collect();
        chart.draw_series(std::iter::once(PathElement::new(ring, grid)))?;
        chart.draw_series(std::iter::once(Text::new(
            label.to_string(),
            polar_to_xy(TICK_LABEL_ANGLE, radius),
            (FONT, 12).into_font().color(&BLACK.mix(0.6)),
        )))?;
    }

    let label_style = (FONT, 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (label, &theta) in series.labels.iter().zip(series.axis_angles()) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), polar_to_xy(theta, outer)],
            grid,
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            polar_to_xy(theta, outer * 1.2),
            label_style.clone(),
        )))?;
    }

    let vertices = series.vertices();
    if !vertices.is_empty() {
        chart.draw_series(std::iter::once(Polygon::new(
            vertices.clone(),
            BLUE.mix(config.fill_opacity).filled(),
        )))?;
        chart.draw_series(LineSeries::new(vertices, BLUE.stroke_width(2)))?;
    }

    Ok(())
}
