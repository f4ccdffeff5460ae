// File: crates/perfchart-core/src/legend.rs
// Summary: Legend model and layout (upper-left box, one swatch + label row per series).

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::{Marker, Series};

const OFFSET: f32 = 10.0; // distance from the plot frame
const PAD: f32 = 8.0;
const SWATCH: f32 = 28.0;
const GAP: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    pub marker: Marker,
}

impl From<&Series> for LegendEntry {
    fn from(s: &Series) -> Self {
        Self { label: s.label.clone(), color: s.color, marker: s.marker }
    }
}

/// Pixel placement of one legend row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    pub swatch_left: f32,
    pub swatch_right: f32,
    pub center_y: f32,
    pub text_x: f32,
    pub baseline_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: skia::Rect,
    pub rows: Vec<LegendRow>,
}

impl LegendLayout {
    /// Lay out `entries` in the upper-left corner of `plot`.
    /// `measure` returns the rendered width of a label at `font_size`.
    /// Returns `None` when there is nothing to show.
    pub fn compute(
        entries: &[LegendEntry],
        plot: &RectI32,
        font_size: f32,
        measure: impl Fn(&str) -> f32,
    ) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let row_h = font_size * 1.6;
        let text_w = entries.iter().map(|e| measure(&e.label)).fold(0.0f32, f32::max);

        let left = plot.left as f32 + OFFSET;
        let top = plot.top as f32 + OFFSET;
        let width = PAD + SWATCH + GAP + text_w + PAD;
        let height = PAD * 2.0 + row_h * entries.len() as f32;
        let frame = skia::Rect::from_xywh(left, top, width, height);

        let rows = (0..entries.len())
            .map(|i| {
                let center_y = top + PAD + row_h * (i as f32 + 0.5);
                LegendRow {
                    swatch_left: left + PAD,
                    swatch_right: left + PAD + SWATCH,
                    center_y,
                    text_x: left + PAD + SWATCH + GAP,
                    baseline_y: center_y + font_size * 0.35,
                }
            })
            .collect();
        Some(Self { frame, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::colors;

    fn entry(label: &str) -> LegendEntry {
        LegendEntry { label: label.into(), color: colors::RED, marker: Marker::Circle }
    }

    #[test]
    fn no_entries_no_legend() {
        let plot = RectI32::from_ltrb(80, 40, 780, 540);
        assert!(LegendLayout::compute(&[], &plot, 12.0, |_| 10.0).is_none());
    }

    #[test]
    fn rows_stack_downward_inside_frame() {
        let plot = RectI32::from_ltrb(80, 40, 780, 540);
        let entries = [entry("Serial On2"), entry("Serial On1"), entry("OpenMP")];
        let layout = LegendLayout::compute(&entries, &plot, 12.0, |s| s.len() as f32 * 7.0).unwrap();

        assert_eq!(layout.rows.len(), 3);
        assert!(layout.frame.left() > plot.left as f32);
        assert!(layout.frame.top() > plot.top as f32);
        // widest label (10 chars) drives the width
        assert!((layout.frame.width() - (PAD + SWATCH + GAP + 70.0 + PAD)).abs() < 1e-3);
        for pair in layout.rows.windows(2) {
            assert!(pair[1].center_y > pair[0].center_y);
        }
        let last = layout.rows.last().unwrap();
        assert!(last.center_y < layout.frame.bottom());
        assert!(last.text_x > last.swatch_right);
    }

    #[test]
    fn entry_from_series_copies_style() {
        let s = Series::new("OpenMP").with_marker(Marker::Triangle).with_color(colors::BLUE);
        let e = LegendEntry::from(&s);
        assert_eq!(e.label, "OpenMP");
        assert_eq!(e.marker, Marker::Triangle);
        assert_eq!(e.color, colors::BLUE);
    }
}
