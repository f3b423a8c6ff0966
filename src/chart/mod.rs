//! Radar chart preparation and rendering.
//!
//! - [`RadarSeries`] — closed polygon coordinates for a set of axes.
//! - [`render`] — draws a [`RadarSeries`] to PNG or SVG with `plotters`.

pub mod render;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::models::RiskVector;

/// Radial reference rings drawn on every chart.
pub const RADIAL_TICKS: [(f64, &str); 3] = [(1.0, "Low"), (2.0, "Moderate"), (3.0, "High")];

/// Polar polygon ready for plotting.
///
/// `angles` and `scores` are closed: the first point is repeated at the end,
/// so both hold `labels.len() + 1` entries. `labels` stays open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub angles: Vec<f64>,
    pub scores: Vec<f64>,
}

impl RadarSeries {
    /// Build from `(label, score)` axes, spaced evenly counter-clockwise from 0.
    pub fn from_axes<I, S>(axes: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (labels, mut scores): (Vec<String>, Vec<f64>) =
            axes.into_iter().map(|(l, s)| (l.into(), s)).unzip();

        let n = labels.len();
        let mut angles: Vec<f64> = (0..n).map(|i| TAU * i as f64 / n as f64).collect();

        if let (Some(&first_angle), Some(&first_score)) = (angles.first(), scores.first()) {
            angles.push(first_angle);
            scores.push(first_score);
        }

        Self {
            labels,
            angles,
            scores,
        }
    }

    pub fn from_vector(levels: &RiskVector) -> Self {
        Self::from_axes(
            levels
                .iter()
                .map(|(factor, level)| (factor.label(), f64::from(level.score()))),
        )
    }

    /// Angles of the axes themselves (without the closing repeat).
    pub fn axis_angles(&self) -> &[f64] {
        &self.angles[..self.labels.len()]
    }

    /// Closed polygon in Cartesian coordinates (angle 0 points right).
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.angles
            .iter()
            .zip(&self.scores)
            .map(|(&theta, &r)| polar_to_xy(theta, r))
            .collect()
    }
}

pub fn polar_to_xy(theta: f64, r: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel::{High, Low, Moderate};

    #[test]
    fn test_six_axes_close_polygon() {
        let v = RiskVector::new([Moderate, Moderate, Moderate, Moderate, High, Low]);
        let series = RadarSeries::from_vector(&v);

        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.angles.len(), 7);
        assert_eq!(series.scores.len(), 7);
        assert_eq!(series.angles[6], series.angles[0]);
        assert_eq!(series.scores[6], series.scores[0]);
        assert_eq!(series.scores, vec![2.0, 2.0, 2.0, 2.0, 3.0, 1.0, 2.0]);
        assert_eq!(series.labels[0], "BOP");
        assert_eq!(series.labels[5], "Smoking");
    }

    #[test]
    fn test_angles_evenly_spaced_without_endpoint() {
        let series = RadarSeries::from_axes([("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)]);
        let expected = [0.0, TAU / 4.0, TAU / 2.0, 3.0 * TAU / 4.0];
        for (got, want) in series.axis_angles().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
        assert!(series.axis_angles().iter().all(|a| *a < TAU));
    }

    #[test]
    fn test_empty_axes() {
        let series = RadarSeries::from_axes(Vec::<(String, f64)>::new());
        assert!(series.labels.is_empty());
        assert!(series.angles.is_empty());
        assert!(series.scores.is_empty());
    }

    #[test]
    fn test_vertices_start_on_positive_x_axis() {
        let series = RadarSeries::from_axes([("a", 3.0), ("b", 1.0), ("c", 2.0), ("d", 1.0)]);
        let vertices = series.vertices();
        assert_eq!(vertices.len(), 5);

        let (x0, y0) = vertices[0];
        assert!((x0 - 3.0).abs() < 1e-12 && y0.abs() < 1e-12);

        // second axis is a quarter turn counter-clockwise
        let (x1, y1) = vertices[1];
        assert!(x1.abs() < 1e-12 && (y1 - 1.0).abs() < 1e-12);

        assert_eq!(vertices[4], vertices[0]);
    }
}
