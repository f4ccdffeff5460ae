// File: crates/perfchart-core/src/view.rs
// Visible data ranges derived from series extents, padded in the axis' own scale space.

use crate::axis::ScaleKind;
use crate::Chart;

/// Fraction of the data span added on each side (matplotlib's default axes margin).
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of every series point, padded by `margin` of the span in linear or
    /// log10 space according to each axis' scale kind.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let xs = chart.series.iter().flat_map(|s| s.xs());
        let ys = chart.series.iter().flat_map(|s| s.ys());
        let (x_min, x_max) = padded_extent(xs, chart.x_axis.kind, margin);
        let (y_min, y_max) = padded_extent(ys, chart.y_axis.kind, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn extent(values: impl Iterator<Item = f64>, positive_only: bool) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite() && (!positive_only || *v > 0.0))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Padded `(min, max)` for one axis. Falls back to `[0, 1]` (linear) or `[1, 10]` (log)
/// when no usable value exists.
pub fn padded_extent(values: impl Iterator<Item = f64>, kind: ScaleKind, margin: f64) -> (f64, f64) {
    match kind {
        ScaleKind::Linear => {
            let Some((lo, hi)) = extent(values, false) else { return (0.0, 1.0) };
            if (hi - lo).abs() < 1e-12 {
                return (lo - 0.5, hi + 0.5);
            }
            let pad = (hi - lo) * margin;
            (lo - pad, hi + pad)
        }
        ScaleKind::Log10 => {
            let Some((lo, hi)) = extent(values, true) else { return (1.0, 10.0) };
            let (t0, t1) = (lo.log10(), hi.log10());
            if (t1 - t0).abs() < 1e-12 {
                return (10f64.powf(t0 - 1.0), 10f64.powf(t1 + 1.0));
            }
            let pad = (t1 - t0) * margin;
            (10f64.powf(t0 - pad), 10f64.powf(t1 + pad))
        }
    }
}
