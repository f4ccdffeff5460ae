// File: crates/perfchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Integer pixel rectangle; `right`/`bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Degenerate surfaces collapse to a 1 px rect instead of inverting.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self::from_ltrb(left, top, right, bottom)
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) as f32 * 0.5
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) as f32 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_subtracts_insets() {
        let r = RectI32::plot_area(800, 600, &Insets::new(80, 20, 40, 60));
        assert_eq!(r, RectI32::from_ltrb(80, 40, 780, 540));
        assert_eq!(r.width(), 700);
        assert_eq!(r.height(), 500);
    }

    #[test]
    fn plot_area_never_inverts() {
        let r = RectI32::plot_area(10, 10, &Insets::new(80, 20, 40, 60));
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
