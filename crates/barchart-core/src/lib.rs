// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports public API for bar-chart layout and rendering.

pub mod chart;
pub mod data;
pub mod geometry;
pub mod layout;
pub mod theme;
pub mod types;

pub use chart::{BarChart, ChartLayout, RenderOptions};
pub use data::{DataSource, FixedSamples, UniformRandom};
pub use geometry::Rect;
pub use layout::{bar_rects, guide_lines, plot_rect, LayoutError};
pub use theme::Theme;
pub use types::ChartConfig;
