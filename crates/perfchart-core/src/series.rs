// File: crates/perfchart-core/src/series.rs
// Summary: Labelled line series with per-point markers and a stroke color.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Matplotlib-style base colors ('r', 'g', 'b').
pub mod colors {
    use skia_safe as skia;

    pub const RED: skia::Color = skia::Color::from_argb(255, 255, 0, 0);
    pub const GREEN: skia::Color = skia::Color::from_argb(255, 0, 128, 0);
    pub const BLUE: skia::Color = skia::Color::from_argb(255, 0, 0, 255);
}

/// Glyph drawn at each data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
    Triangle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
    pub color: skia::Color,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), marker: Marker::None, color: colors::BLUE }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(label) }
    }

    /// Zip a shared x-domain with one column of y values.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(ChartError::invalid(format!(
                "series '{}' has {} y values for {} x values",
                label,
                ys.len(),
                xs.len()
            )));
        }
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Ok(Self::with_data(label, data))
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(_, y)| y)
    }
}
