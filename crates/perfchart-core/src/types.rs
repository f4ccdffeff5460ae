// File: crates/perfchart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, grid dash).

/// Default surface width in pixels (8 in at 100 dpi).
pub const WIDTH: i32 = 800;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Dash pattern for grid lines: on/off lengths in pixels.
pub const GRID_DASH: [f32; 2] = [3.7, 1.6];
/// Grid stroke width in pixels.
pub const GRID_WIDTH: f32 = 0.5;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels + rotated y label on the left, title on top, x label below
        Self::new(84, 24, 44, 64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_insets_leave_room_on_default_canvas() {
        let i = Insets::default();
        assert!((i.hsum() as i32) < WIDTH / 2);
        assert!((i.vsum() as i32) < HEIGHT / 2);
    }
}
