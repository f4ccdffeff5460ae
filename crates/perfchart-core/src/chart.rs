// File: crates/perfchart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (Skia CPU raster → RGBA/PNG, Skia SVG canvas → SVG).

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::Ticks;
use crate::legend::{LegendEntry, LegendLayout};
use crate::scale::AxisScale;
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, GRID_DASH, GRID_WIDTH, HEIGHT, WIDTH};
use crate::validate::validate;
use crate::view::{ViewState, DEFAULT_MARGIN};
use crate::Axis;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels, legend labels). Off gives font-independent pixels.
    pub draw_labels: bool,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
    pub line_width: f32,
    pub marker_radius: f32,
    pub grid_dash: [f32; 2],
    pub grid_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            title_size: 16.0,
            label_size: 14.0,
            tick_size: 12.0,
            legend_size: 12.0,
            line_width: 2.0,
            marker_radius: 4.0,
            grid_dash: GRID_DASH,
            grid_width: GRID_WIDTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padding by `margin` of the span
    /// (in log10 space for log axes).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let view = ViewState::from_chart(self, margin);
        view.apply_to_chart(self);
        debug!(
            x_min = view.x_min, x_max = view.x_max,
            y_min = view.y_min, y_max = view.y_max,
            "autoscaled axes"
        );
    }

    /// Autoscale with the default 5% margin.
    pub fn autoscale(&mut self) {
        self.autoscale_axes(DEFAULT_MARGIN);
    }

    /// Reject charts that cannot be drawn under the current axis scale kinds.
    pub fn validate(&self) -> Result<()> {
        validate(&self.series, self.x_axis.kind, self.y_axis.kind)
    }

    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series.iter().map(LegendEntry::from).collect()
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.validate()?;
        let (w, h) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("failed to read back raster pixels".into()));
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(pixels, w, h)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.validate()?;
        let bounds = skia::Rect::from_iwh(opts.width, opts.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, opts);
        Ok(canvas.end().as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_file(output_svg_path.as_ref(), &bytes)
    }

    /// Backend-independent drawing pass; callers validate first.
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = AxisScale::horizontal(&self.x_axis, &plot);
        let sy = AxisScale::vertical(&self.y_axis, &plot);
        let x_ticks = Ticks::for_axis(&self.x_axis);
        let y_ticks = Ticks::for_axis(&self.y_axis);
        debug!(
            x_major = x_ticks.major.len(), x_minor = x_ticks.minor.len(),
            y_major = y_ticks.major.len(), y_minor = y_ticks.minor.len(),
            "tick layout"
        );

        draw_grid(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, opts);

        canvas.save();
        canvas.clip_rect(to_rect(&plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &sx, &sy, s, opts);
        }
        canvas.restore();

        draw_frame(canvas, &plot, &sx, &sy, &x_ticks, &y_ticks, theme);

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(shaper) = &shaper {
            draw_labels(canvas, shaper, &plot, &sx, &sy, &x_ticks, &y_ticks, self, opts);
        }
        draw_legend(canvas, shaper.as_ref(), &plot, &self.legend_entries(), opts);
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}

pub(crate) fn encode_png(pixels: Vec<u8>, w: i32, h: i32) -> Result<Vec<u8>> {
    let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| ChartError::Encode("pixel buffer does not match image size".into()))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &AxisScale,
    sy: &AxisScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    opts: &RenderOptions,
) {
    let dash = skia::PathEffect::dash(&opts.grid_dash, 0.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // minors first so majors sit on top
    let mut minor = stroke(opts.theme.grid_minor, opts.grid_width);
    minor.set_path_effect(dash.clone());
    for &v in &x_ticks.minor {
        let x = sx.to_px(v);
        canvas.draw_line((x, t), (x, b), &minor);
    }
    for &v in &y_ticks.minor {
        let y = sy.to_px(v);
        canvas.draw_line((l, y), (r, y), &minor);
    }

    let mut major = stroke(opts.theme.grid_major, opts.grid_width);
    major.set_path_effect(dash);
    for tick in &x_ticks.major {
        let x = sx.to_px(tick.value);
        canvas.draw_line((x, t), (x, b), &major);
    }
    for tick in &y_ticks.major {
        let y = sy.to_px(tick.value);
        canvas.draw_line((l, y), (r, y), &major);
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    plot: &RectI32,
    sx: &AxisScale,
    sy: &AxisScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let frame = stroke(theme.axis_line, 1.0);
    canvas.draw_rect(to_rect(plot), &frame);

    // outward ticks on the bottom and left spines
    let tick = stroke(theme.tick, 1.0);
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for t in &x_ticks.major {
        let x = sx.to_px(t.value);
        canvas.draw_line((x, b), (x, b + 5.0), &tick);
    }
    for &v in &x_ticks.minor {
        let x = sx.to_px(v);
        canvas.draw_line((x, b), (x, b + 3.0), &tick);
    }
    for t in &y_ticks.major {
        let y = sy.to_px(t.value);
        canvas.draw_line((l - 5.0, y), (l, y), &tick);
    }
    for &v in &y_ticks.minor {
        let y = sy.to_px(v);
        canvas.draw_line((l - 3.0, y), (l, y), &tick);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: &RectI32,
    sx: &AxisScale,
    sy: &AxisScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    chart: &Chart,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let (l, t, b) = (plot.left as f32, plot.top as f32, plot.bottom as f32);

    let x_tick_baseline = b + 8.0 + opts.tick_size;
    for tick in &x_ticks.major {
        shaper.draw(canvas, &tick.label, sx.to_px(tick.value), x_tick_baseline, opts.tick_size, theme.tick, Anchor::Center);
    }
    for tick in &y_ticks.major {
        let y = sy.to_px(tick.value) + opts.tick_size * 0.35;
        shaper.draw(canvas, &tick.label, l - 8.0, y, opts.tick_size, theme.tick, Anchor::Right);
    }

    if !chart.x_axis.label.is_empty() {
        let baseline = x_tick_baseline + 10.0 + opts.label_size;
        shaper.draw(canvas, &chart.x_axis.label, plot.center_x(), baseline, opts.label_size, theme.axis_label, Anchor::Center);
    }
    if !chart.y_axis.label.is_empty() {
        let x = 10.0 + opts.label_size;
        shaper.draw_vertical(canvas, &chart.y_axis.label, x, plot.center_y(), opts.label_size, theme.axis_label);
    }
    if !chart.title.is_empty() {
        shaper.draw(canvas, &chart.title, plot.center_x(), t - 12.0, opts.title_size, theme.title, Anchor::Center);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: &RectI32,
    entries: &[LegendEntry],
    opts: &RenderOptions,
) {
    let size = opts.legend_size;
    // without a shaper, reserve an estimated width so the box keeps its shape
    let measure = |s: &str| match shaper {
        Some(sh) => sh.measure_width(s, size),
        None => s.chars().count() as f32 * size * 0.6,
    };
    let Some(layout) = LegendLayout::compute(entries, plot, size, measure) else { return };

    let rrect = skia::RRect::new_rect_xy(layout.frame, 3.0, 3.0);
    canvas.draw_rrect(&rrect, &fill(opts.theme.legend_fill));
    canvas.draw_rrect(&rrect, &stroke(opts.theme.legend_border, 1.0));

    for (entry, row) in entries.iter().zip(&layout.rows) {
        let line = line_paint(entry.color, opts.line_width);
        canvas.draw_line((row.swatch_left, row.center_y), (row.swatch_right, row.center_y), &line);
        let mid = (row.swatch_left + row.swatch_right) * 0.5;
        draw_marker(canvas, entry.marker, (mid, row.center_y), opts.marker_radius, entry.color);
        if let Some(sh) = shaper {
            sh.draw(canvas, &entry.label, row.text_x, row.baseline_y, size, opts.theme.axis_label, Anchor::Left);
        }
    }
}

fn line_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = stroke(color, width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint
}

fn draw_line_series(canvas: &skia::Canvas, sx: &AxisScale, sy: &AxisScale, series: &Series, opts: &RenderOptions) {
    let data = &series.data_xy;
    let Some(&(x0, y0)) = data.first() else { return };

    if data.len() > 1 {
        let mut path = skia::PathBuilder::new();
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        canvas.draw_path(&path.snapshot(), &line_paint(series.color, opts.line_width));
    }

    for &(x, y) in data {
        draw_marker(canvas, series.marker, (sx.to_px(x), sy.to_px(y)), opts.marker_radius, series.color);
    }
}

/// Filled marker glyph centered on `center`; `r` is the circle radius, other shapes match its area roughly.
fn draw_marker(canvas: &skia::Canvas, marker: Marker, center: (f32, f32), r: f32, color: skia::Color) {
    let (cx, cy) = center;
    let paint = fill(color);
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle(center, r, &paint);
        }
        Marker::Square => {
            let h = r * 0.9;
            canvas.draw_rect(skia::Rect::from_ltrb(cx - h, cy - h, cx + h, cy + h), &paint);
        }
        Marker::Triangle => {
            let mut path = skia::PathBuilder::new();
            path.move_to((cx, cy - r * 1.2));
            path.line_to((cx + r * 1.1, cy + r * 0.7));
            path.line_to((cx - r * 1.1, cy + r * 0.7));
            path.close();
            canvas.draw_path(&path.snapshot(), &paint);
        }
    }
}
