// File: crates/barchart-core/src/layout.rs
// Summary: Bar-layout engine: plot rect from padding, bar rects from magnitudes, guide lines.

use thiserror::Error;

use crate::geometry::Rect;

/// Precondition violations detected before any geometry is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("empty dataset: at least one magnitude is required")]
    EmptyData,
    #[error("degenerate drawing area: padding {padding} leaves no room in a {width}x{height} view")]
    DegenerateArea { padding: f32, width: f32, height: f32 },
}

/// Apply uniform `padding` inward from all four edges of a view.
/// Fails when the padding consumes the full width or height.
pub fn plot_rect(view_width: f32, view_height: f32, padding: f32) -> Result<Rect, LayoutError> {
    if padding * 2.0 >= view_width || padding * 2.0 >= view_height {
        return Err(LayoutError::DegenerateArea { padding, width: view_width, height: view_height });
    }
    Ok(Rect::from_ltrb(padding, padding, view_width - padding, view_height - padding))
}

/// Space one bar per magnitude evenly inside `rect`: one `spacing` gap before
/// the first bar and one after every bar, the remaining width split equally.
/// Bars grow upward from the bottom edge; a magnitude of 1.0 reaches the top
/// edge. Values outside [0, 1] are not rejected: they produce bars taller
/// than the plot or with negative height.
pub fn bar_rects(rect: Rect, spacing: f32, magnitudes: &[f32]) -> Result<Vec<Rect>, LayoutError> {
    if magnitudes.is_empty() {
        return Err(LayoutError::EmptyData);
    }
    let n = magnitudes.len();
    let total_spacing = spacing * (n as f32 + 1.0);
    let bar_width = (rect.width() - total_spacing) / n as f32;

    let mut bars = Vec::with_capacity(n);
    let mut left = rect.left + spacing;
    for &m in magnitudes {
        let top = rect.top + rect.height() * (1.0 - m);
        bars.push(Rect::from_ltrb(left, top, left + bar_width, rect.bottom));
        left += bar_width + spacing;
    }
    Ok(bars)
}

/// Horizontal guide-line y-coordinates: `divisions` evenly spaced values
/// starting at the top edge, bottom edge excluded (the x-axis covers it).
pub fn guide_lines(rect: Rect, divisions: usize) -> Vec<f32> {
    if divisions == 0 {
        return Vec::new();
    }
    let step = rect.height() / divisions as f32;
    (0..divisions).map(|i| rect.top + i as f32 * step).collect()
}
