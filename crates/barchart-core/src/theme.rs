// File: crates/barchart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and stroke widths.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub bar_fill: skia::Color,
    pub axis_line: skia::Color,
    pub guide_line: skia::Color,
    pub axis_width: f32,
    pub guide_width: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            bar_fill: skia::Color::from_argb(255, 96, 156, 255),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            guide_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_width: 1.5,
            guide_width: 1.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            bar_fill: skia::Color::from_argb(255, 40, 120, 200),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            guide_line: skia::Color::from_argb(255, 230, 230, 235),
            axis_width: 1.5,
            guide_width: 1.0,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            bar_fill: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            guide_line: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_width: 2.0,
            guide_width: 1.0,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
