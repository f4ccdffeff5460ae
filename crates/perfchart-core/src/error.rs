// File: crates/perfchart-core/src/error.rs
// Summary: Error taxonomy for chart validation, rendering and export.

use thiserror::Error;

use crate::axis::AxisId;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Series data that cannot form a chart: nothing to plot, ragged lengths, non-finite values.
    #[error("invalid data: {reason}")]
    InvalidData { reason: String },

    /// A value that has no image under the axis transform (log of zero or a negative number).
    #[error("domain error: {axis} axis is logarithmic but series '{series}' has value {value} at point {index}")]
    Domain {
        axis: AxisId,
        series: String,
        index: usize,
        value: f64,
    },

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidData { reason: reason.into() }
    }

    /// True for the two data errors (`InvalidData`, `Domain`) as opposed to output failures.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::InvalidData { .. } | Self::Domain { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
