// File: crates/perfchart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod render;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod validate;
pub mod view;

pub use axis::{Axis, AxisId, ScaleKind};
pub use chart::{Chart, RenderOptions};
pub use error::{ChartError, Result};
pub use legend::LegendEntry;
pub use render::{render, render_with, RenderedChart};
pub use series::{colors, Marker, Series};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
