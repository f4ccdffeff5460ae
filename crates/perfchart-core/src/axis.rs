// File: crates/perfchart-core/src/axis.rs
// Summary: Axis model with labels, ranges and scale kind.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    pub fn is_log(self) -> bool {
        matches!(self, ScaleKind::Log10)
    }
}

/// Which of the two chart axes a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn default_x() -> Self {
        Self::new("x", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("y", 0.0, 1.0)
    }

    /// Range as `(min, max)`.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
