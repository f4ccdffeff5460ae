// File: crates/perfchart-core/tests/scenarios.rs
// Purpose: End-to-end render contract: success cases, data errors, idempotence.

use perfchart_core::{colors, render, ChartError, Marker, ScaleKind, Series};

const PARTICLES: [f64; 5] = [1000.0, 5000.0, 10000.0, 15000.0, 20000.0];
const SERIAL_ON2: [f64; 5] = [0.899033, 21.6698, 88.2551, 223.524, 367.433];
const SERIAL_ON1: [f64; 5] = [0.0974842, 0.583493, 1.24503, 1.95879, 2.63991];
const OPENMP: [f64; 5] = [0.0698181, 0.411675, 0.442495, 0.802078, 0.964335];

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

fn timing_series() -> Vec<Series> {
    vec![
        Series::from_columns("Serial On2", &PARTICLES, &SERIAL_ON2).unwrap()
            .with_marker(Marker::Circle).with_color(colors::RED),
        Series::from_columns("Serial On1", &PARTICLES, &SERIAL_ON1).unwrap()
            .with_marker(Marker::Square).with_color(colors::GREEN),
        Series::from_columns("OpenMP", &PARTICLES, &OPENMP).unwrap()
            .with_marker(Marker::Triangle).with_color(colors::BLUE),
    ]
}

fn render_log_log(series: Vec<Series>) -> perfchart_core::Result<perfchart_core::RenderedChart> {
    render(series, "Number of Particles", "Time (seconds)", "Performance Comparison", ScaleKind::Log10, ScaleKind::Log10)
}

#[test]
fn single_series_renders_with_one_legend_entry() {
    let s = Series::from_columns("Serial On2", &PARTICLES, &SERIAL_ON2).unwrap().with_marker(Marker::Circle);
    let out = render_log_log(vec![s]).expect("render should succeed");

    let legend = out.legend();
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0].label, "Serial On2");
    assert_eq!(out.point_counts(), vec![5]);
    assert!(out.png_bytes().starts_with(&PNG_MAGIC));
    assert_eq!(out.rgba().len(), (out.width() * out.height() * 4) as usize);
}

#[test]
fn three_series_on_log_log_axes() {
    let out = render_log_log(timing_series()).expect("render should succeed");

    assert_eq!(out.x_scale(), ScaleKind::Log10);
    assert_eq!(out.y_scale(), ScaleKind::Log10);
    assert_eq!(out.point_counts(), vec![5, 5, 5]);
    let labels: Vec<_> = out.legend().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Serial On2", "Serial On1", "OpenMP"]);

    // autoscaled ranges enclose every point and stay positive
    let (x0, x1) = out.x_range();
    let (y0, y1) = out.y_range();
    assert!(x0 > 0.0 && x0 < 1000.0 && x1 > 20000.0);
    assert!(y0 > 0.0 && y0 < 0.0698181 && y1 > 367.433);
}

#[test]
fn mismatched_lengths_are_invalid_data() {
    let series = vec![
        Series::from_columns("a", &PARTICLES, &SERIAL_ON2).unwrap(),
        Series::with_data("b", PARTICLES[..4].iter().copied().zip(SERIAL_ON1).collect()),
        Series::from_columns("c", &PARTICLES, &OPENMP).unwrap(),
    ];
    let err = render_log_log(series).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData { .. }), "got {err}");
    assert!(err.is_data_error());
}

#[test]
fn series_with_different_x_values_are_invalid_data() {
    let shifted: Vec<f64> = PARTICLES.iter().map(|x| x + 1.0).collect();
    let series = vec![
        Series::from_columns("a", &PARTICLES, &SERIAL_ON2).unwrap(),
        Series::from_columns("b", &shifted, &SERIAL_ON1).unwrap(),
    ];
    let err = render_log_log(series).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData { .. }), "got {err}");
}

#[test]
fn zero_on_log_y_is_a_domain_error() {
    let mut ys = SERIAL_ON1;
    ys[2] = 0.0;
    let s = Series::from_columns("with zero", &PARTICLES, &ys).unwrap();
    let err = render_log_log(vec![s]).unwrap_err();
    assert!(matches!(err, ChartError::Domain { index: 2, .. }), "got {err}");
}

#[test]
fn zero_is_accepted_on_linear_y() {
    let mut ys = SERIAL_ON1;
    ys[0] = 0.0;
    let s = Series::from_columns("with zero", &PARTICLES, &ys).unwrap();
    let out = render(vec![s], "n", "t", "linear", ScaleKind::Log10, ScaleKind::Linear).expect("linear y accepts zero");
    assert_eq!(out.y_scale(), ScaleKind::Linear);
    assert!(out.y_range().0 < 0.0);
}

#[test]
fn values_near_f64_max_render_on_linear_y() {
    let s = Series::from_columns("extreme", &[1.0, 2.0], &[-8e307, 8e307]).unwrap();
    let out = render(vec![s], "n", "t", "extreme", ScaleKind::Linear, ScaleKind::Linear).expect("finite values render");
    let (y0, y1) = out.y_range();
    assert!(y0.is_finite() && y1.is_finite() && y0 < -8e307 && y1 > 8e307);
}

#[test]
fn empty_series_list_is_invalid_data() {
    let err = render_log_log(Vec::new()).unwrap_err();
    assert!(matches!(err, ChartError::InvalidData { .. }));
}

#[test]
fn rendering_twice_is_identical() {
    let a = render_log_log(timing_series()).expect("first render");
    let b = render_log_log(timing_series()).expect("second render");

    assert_eq!(a.title(), b.title());
    assert_eq!(a.x_label(), b.x_label());
    assert_eq!(a.y_label(), b.y_label());
    assert_eq!(a.legend(), b.legend());
    assert_eq!(a.point_counts(), b.point_counts());
    assert_eq!(a.x_range(), b.x_range());
    assert_eq!(a.y_range(), b.y_range());
    assert!(a.rgba() == b.rgba(), "pixels differ between identical renders");
}
