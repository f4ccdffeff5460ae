// File: crates/perfchart-core/src/render.rs
// Summary: One-call renderer: validate series, build and autoscale a chart, rasterize, keep the artifact.

use std::path::Path;

use tracing::info;

use crate::axis::{Axis, ScaleKind};
use crate::chart::{encode_png, Chart, RenderOptions};
use crate::error::{ChartError, Result};
use crate::legend::LegendEntry;
use crate::series::Series;
use crate::validate::validate;

/// A rendered chart: encoded PNG, raw pixels, and the metadata that went into them.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    chart: Chart,
    opts: RenderOptions,
    rgba: Vec<u8>,
    png: Vec<u8>,
}

impl RenderedChart {
    pub fn title(&self) -> &str { &self.chart.title }
    pub fn x_label(&self) -> &str { &self.chart.x_axis.label }
    pub fn y_label(&self) -> &str { &self.chart.y_axis.label }
    pub fn x_scale(&self) -> ScaleKind { self.chart.x_axis.kind }
    pub fn y_scale(&self) -> ScaleKind { self.chart.y_axis.kind }
    pub fn x_range(&self) -> (f64, f64) { self.chart.x_axis.range() }
    pub fn y_range(&self) -> (f64, f64) { self.chart.y_axis.range() }
    pub fn width(&self) -> i32 { self.opts.width }
    pub fn height(&self) -> i32 { self.opts.height }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.chart.legend_entries()
    }

    /// Number of points in each series, in drawing order.
    pub fn point_counts(&self) -> Vec<usize> {
        self.chart.series.iter().map(Series::len).collect()
    }

    /// Unpremultiplied RGBA8, row stride `width * 4`.
    pub fn rgba(&self) -> &[u8] { &self.rgba }

    pub fn png_bytes(&self) -> &[u8] { &self.png }

    pub fn chart(&self) -> &Chart { &self.chart }

    /// Write the artifact to `path`: PNG for `.png`, SVG (re-drawn as vectors) for `.svg`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &self.png)?;
                info!(path = %path.display(), bytes = self.png.len(), "wrote chart");
                Ok(())
            }
            "svg" => self.chart.render_to_svg(&self.opts, path),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Render `series` as a line chart with the given labels and axis scales, using default options.
pub fn render(
    series: Vec<Series>,
    x_label: &str,
    y_label: &str,
    title: &str,
    x_scale: ScaleKind,
    y_scale: ScaleKind,
) -> Result<RenderedChart> {
    render_with(series, x_label, y_label, title, x_scale, y_scale, &RenderOptions::default())
}

pub fn render_with(
    series: Vec<Series>,
    x_label: &str,
    y_label: &str,
    title: &str,
    x_scale: ScaleKind,
    y_scale: ScaleKind,
    opts: &RenderOptions,
) -> Result<RenderedChart> {
    validate(&series, x_scale, y_scale)?;

    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::new(x_label, 0.0, 1.0).with_kind(x_scale);
    chart.y_axis = Axis::new(y_label, 0.0, 1.0).with_kind(y_scale);
    for s in series {
        chart.add_series(s);
    }
    chart.autoscale();

    let (rgba, w, h, _) = chart.render_to_rgba8(opts)?;
    let png = encode_png(rgba.clone(), w, h)?;
    info!(
        title = %chart.title,
        series = chart.series.len(),
        width = w,
        height = h,
        "rendered chart"
    );
    Ok(RenderedChart { chart, opts: opts.clone(), rgba, png })
}
