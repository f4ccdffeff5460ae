// File: crates/perfchart-core/src/scale.rs
// Summary: Linear and log10 transforms from data values to pixel coordinates.

use crate::axis::{Axis, ScaleKind};
use crate::geometry::RectI32;

/// Smallest positive value a log scale will take the logarithm of.
const LOG_FLOOR: f64 = 1e-300;

/// Maps one data axis onto a pixel interval.
///
/// `start_px` is where `min` lands and `end_px` where `max` lands, so a
/// vertical scale is built with `start_px = bottom`, `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    // transformed endpoints (log10 when kind is Log10)
    t_min: f64,
    t_max: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, start_px: f32, end_px: f32, min: f64, max: f64) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, min, max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, min, max),
        }
    }

    pub fn new_linear(start_px: f32, end_px: f32, min: f64, mut max: f64) -> Self {
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        Self { start_px, end_px, min, max, kind: ScaleKind::Linear, t_min: min, t_max: max }
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut min: f64, mut max: f64) -> Self {
        // Ensure strictly positive range for log scale
        min = min.max(LOG_FLOOR);
        if max <= min { max = min * 10.0; }
        Self { start_px, end_px, min, max, kind: ScaleKind::Log10, t_min: min.log10(), t_max: max.log10() }
    }

    /// Horizontal scale for `axis` spanning the plot rect left to right.
    pub fn horizontal(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.kind, plot.left as f32, plot.right as f32, axis.min, axis.max)
    }

    /// Vertical scale for `axis` spanning the plot rect bottom to top.
    pub fn vertical(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.kind, plot.bottom as f32, plot.top as f32, axis.min, axis.max)
    }

    #[inline]
    fn forward(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.max(LOG_FLOOR).log10(),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-12);
        let frac = (self.forward(v) - self.t_min) / span;
        self.start_px + frac as f32 * (self.end_px - self.start_px)
    }
}
