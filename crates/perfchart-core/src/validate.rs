// File: crates/perfchart-core/src/validate.rs
// Summary: Input checks run before any drawing: non-empty, equal lengths, shared x, finite, log-domain.

use crate::axis::{AxisId, ScaleKind};
use crate::error::{ChartError, Result};
use crate::series::Series;

/// Check that `series` can be drawn on axes with the given scale kinds.
///
/// Length and shared-x problems are reported before domain problems so a
/// ragged input is always `InvalidData`, whatever its values.
pub fn validate(series: &[Series], x_kind: ScaleKind, y_kind: ScaleKind) -> Result<()> {
    let Some(first) = series.first() else {
        return Err(ChartError::invalid("no series to plot"));
    };
    if let Some(empty) = series.iter().find(|s| s.is_empty()) {
        return Err(ChartError::invalid(format!("series '{}' has no points", empty.label)));
    }

    let expected = first.len();
    if series.iter().any(|s| s.len() != expected) {
        let lengths = series
            .iter()
            .map(|s| format!("'{}'={}", s.label, s.len()))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ChartError::invalid(format!("series lengths differ: {lengths}")));
    }
    // every series is plotted against the first series' x values
    for s in &series[1..] {
        let mismatch = first.xs().zip(s.xs()).position(|(a, b)| a != b && !(a.is_nan() && b.is_nan()));
        if let Some(index) = mismatch {
            return Err(ChartError::invalid(format!(
                "series '{}' does not share the x values of '{}' (first difference at {index})",
                s.label, first.label
            )));
        }
    }

    for s in series {
        for (index, &(x, y)) in s.data_xy.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(ChartError::invalid(format!(
                    "series '{}' has a non-finite point ({x}, {y}) at {index}",
                    s.label
                )));
            }
            check_domain(AxisId::X, x_kind, s, index, x)?;
            check_domain(AxisId::Y, y_kind, s, index, y)?;
        }
    }
    Ok(())
}

fn check_domain(axis: AxisId, kind: ScaleKind, s: &Series, index: usize, value: f64) -> Result<()> {
    if kind.is_log() && value <= 0.0 {
        return Err(ChartError::Domain { axis, series: s.label.clone(), index, value });
    }
    Ok(())
}
