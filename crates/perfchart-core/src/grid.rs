// File: crates/perfchart-core/src/grid.rs
// Summary: Major/minor tick layout for linear and log10 axes, with tick label formatting.

use crate::axis::{Axis, ScaleKind};

/// A labelled major tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Tick positions for one axis. Grid lines are drawn at both sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    pub major: Vec<Tick>,
    pub minor: Vec<f64>,
}

impl Ticks {
    pub fn for_axis(axis: &Axis) -> Self {
        match axis.kind {
            ScaleKind::Linear => linear_ticks(axis.min, axis.max, 6),
            ScaleKind::Log10 => log_ticks(axis.min, axis.max),
        }
    }
}

fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    let tol = (hi - lo).abs() * 1e-9;
    v >= lo - tol && v <= hi + tol
}

/// Decade ticks at 10^k, minor ticks at 2..9 x 10^k.
///
/// When the range holds no full decade the minor ticks are promoted to labelled
/// majors so the axis is never left without labels.
pub fn log_ticks(min: f64, max: f64) -> Ticks {
    if !(min > 0.0) || !(max > min) || !max.is_finite() {
        return Ticks::default();
    }
    let k0 = min.log10().floor() as i32;
    let k1 = max.log10().ceil() as i32;

    let mut major = Vec::new();
    let mut minor = Vec::new();
    for k in k0..=k1 {
        let decade = 10f64.powi(k);
        if in_range(decade, min, max) {
            major.push(Tick { value: decade, label: format_decade(k) });
        }
        for m in 2..=9 {
            let v = m as f64 * decade;
            if in_range(v, min, max) {
                minor.push(v);
            }
        }
    }

    if major.is_empty() {
        major = minor
            .drain(..)
            .map(|v| Tick { value: v, label: format_mantissa(v) })
            .collect();
    }
    Ticks { major, minor }
}

/// Upper bound on ticks walked per axis, major or minor.
const MAX_TICKS: usize = 10_000;

/// "Nice" linear ticks (steps of 1, 2, 2.5, 5 x 10^k) aiming for about `target` majors.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Ticks {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Ticks::default();
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mantissa = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&m| m >= norm)
        .unwrap_or(10.0);
    let step = mantissa * mag;
    let subdivisions = if mantissa == 2.0 || mantissa == 2.5 { 4 } else { 5 };

    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    if mantissa == 2.5 { decimals += 1; }

    let first = (min / step).ceil() * step;
    let mut major: Vec<Tick> = Vec::new();
    for i in 0..MAX_TICKS {
        let mut v = first + step * i as f64;
        if !in_range(v, min, max) { break; }
        if v.abs() < step * 1e-9 { v = 0.0; }
        // steps below the float spacing of `v` round onto the previous tick
        if major.last().is_some_and(|t| t.value == v) { continue; }
        major.push(Tick { value: v, label: format!("{:.*}", decimals, v) });
    }

    let minor_step = step / subdivisions as f64;
    let mut minor: Vec<f64> = Vec::new();
    let start = first - step;
    for j in 1..MAX_TICKS {
        if j % subdivisions == 0 { continue; }
        let v = start + minor_step * j as f64;
        if !in_range(v, min, max) {
            if v > max { break; }
            continue;
        }
        if minor.last() != Some(&v) {
            minor.push(v);
        }
    }
    Ticks { major, minor }
}

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// `10` followed by the exponent in superscript digits, e.g. `10³`, `10⁻¹`.
pub fn format_decade(k: i32) -> String {
    let mut s = String::from("10");
    if k < 0 { s.push('⁻'); }
    for d in k.unsigned_abs().to_string().chars() {
        let idx = d.to_digit(10).unwrap_or(0) as usize;
        s.push(SUPERSCRIPTS[idx]);
    }
    s
}

/// Label for a minor log tick promoted to a major: `m×10ᵏ`.
fn format_mantissa(v: f64) -> String {
    let k = v.log10().floor() as i32;
    let m = (v / 10f64.powi(k)).round() as i64;
    format!("{}×{}", m, format_decade(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(t: &[Tick]) -> Vec<f64> {
        t.iter().map(|t| t.value).collect()
    }

    #[test]
    fn log_ticks_cover_decades_and_minors() {
        let t = log_ticks(0.5, 2000.0);
        assert_eq!(values(&t.major), vec![1.0, 10.0, 100.0, 1000.0]);
        // 0.5..0.9 (5) + 2..9 (8) + 20..90 (8) + 200..900 (8) + 2000 (1)
        assert_eq!(t.minor.len(), 30);
        assert!(t.minor.iter().all(|&v| (0.5 - 1e-9..=2000.0 + 1e-6).contains(&v)));
    }

    #[test]
    fn log_ticks_inside_single_decade_promote_minors() {
        let t = log_ticks(2.5, 8.5);
        assert!(t.minor.is_empty());
        assert_eq!(values(&t.major), vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(t.major[0].label, "3×10⁰");
    }

    #[test]
    fn log_ticks_reject_non_positive_range() {
        assert_eq!(log_ticks(0.0, 10.0), Ticks::default());
        assert_eq!(log_ticks(10.0, 1.0), Ticks::default());
    }

    #[test]
    fn decade_labels_use_superscripts() {
        assert_eq!(format_decade(0), "10⁰");
        assert_eq!(format_decade(3), "10³");
        assert_eq!(format_decade(-12), "10⁻¹²");
    }

    #[test]
    fn linear_ticks_pick_nice_steps() {
        let t = linear_ticks(0.0, 10.0, 5);
        assert_eq!(values(&t.major), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(t.major[1].label, "2");
        // 4 subdivisions per step of 2 -> 3 minors per gap, 5 gaps
        assert_eq!(t.minor.len(), 15);
    }

    #[test]
    fn linear_ticks_format_fractional_steps() {
        let t = linear_ticks(-0.3, 0.3, 6);
        assert!(t.major.iter().any(|t| t.label == "0.0"));
        assert!(t.major.iter().all(|t| t.label != "-0.0"));
    }

    #[test]
    fn linear_ticks_empty_for_degenerate_span() {
        assert_eq!(linear_ticks(1.0, 1.0, 6), Ticks::default());
        assert_eq!(linear_ticks(0.0, f64::INFINITY, 6), Ticks::default());
    }

    #[test]
    fn linear_ticks_survive_spans_near_f64_max() {
        let t = linear_ticks(-8.8e307, 8.8e307, 6);
        assert_eq!(t.major.len(), 3);
        assert_eq!(t.major[1].value, 0.0);
        assert_eq!(t.major[0].value, -t.major[2].value);
        assert!((t.major[2].value / 5e307 - 1.0).abs() < 1e-9);
        assert!(!t.minor.is_empty());
        assert!(t.minor.iter().all(|v| v.is_finite() && (-8.8e307..=8.8e307).contains(v)));
    }

    #[test]
    fn linear_ticks_are_unique_below_float_spacing() {
        // 1e15 has a float spacing of 0.125, coarser than the chosen step
        let t = linear_ticks(1e15, 1e15 + 0.125, 6);
        assert!(!t.major.is_empty());
        assert!(t.major.windows(2).all(|w| w[0].value < w[1].value && w[0].label != w[1].label));
        assert!(t.minor.windows(2).all(|w| w[0] < w[1]));
    }
}
