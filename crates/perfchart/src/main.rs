// File: crates/perfchart/src/main.rs
// Summary: Renders the particle-simulation timing comparison (serial O(n^2), serial O(n), OpenMP) as a log-log PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use perfchart_core::{colors, render, Marker, ScaleKind, Series};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Number of simulated particles per run.
const PARTICLE_NUM: [f64; 5] = [1000.0, 5000.0, 10000.0, 15000.0, 20000.0];
/// Wall-clock seconds for each run.
const SERIAL_ON2: [f64; 5] = [0.899033, 21.6698, 88.2551, 223.524, 367.433];
const SERIAL_ON1: [f64; 5] = [0.0974842, 0.583493, 1.24503, 1.95879, 2.63991];
const OPENMP: [f64; 5] = [0.0698181, 0.411675, 0.442495, 0.802078, 0.964335];

const OUTPUT: &str = "target/out/performance_comparison.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("perfchart=info,perfchart_core=info")),
        )
        .init();

    let series = vec![
        Series::from_columns("Serial On2", &PARTICLE_NUM, &SERIAL_ON2)?
            .with_marker(Marker::Circle)
            .with_color(colors::RED),
        Series::from_columns("Serial On1", &PARTICLE_NUM, &SERIAL_ON1)?
            .with_marker(Marker::Square)
            .with_color(colors::GREEN),
        Series::from_columns("OpenMP", &PARTICLE_NUM, &OPENMP)?
            .with_marker(Marker::Triangle)
            .with_color(colors::BLUE),
    ];

    let chart = render(
        series,
        "Number of Particles (Log Transformed)",
        "Time (seconds) (Log Transformed)",
        "Performance Comparison (Log Scale)",
        ScaleKind::Log10,
        ScaleKind::Log10,
    )
    .context("failed to render performance chart")?;

    let out = PathBuf::from(OUTPUT);
    chart
        .save(&out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), "chart ready");
    println!("Wrote {}", out.display());
    Ok(())
}
