// File: crates/barchart-core/src/chart.rs
// Summary: BarChart model and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::data::DataSource;
use crate::geometry::Rect;
use crate::layout::{bar_rects, guide_lines, plot_rect, LayoutError};
use crate::theme::Theme;
use crate::types::{ChartConfig, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::dark(),
        }
    }
}

/// Geometry produced by one layout pass. Transient: recomputed for every
/// render from current dimensions and config, never held across calls.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub plot: Rect,
    pub bars: Vec<Rect>,
    pub guides: Vec<f32>,
}

pub struct BarChart {
    pub magnitudes: Vec<f32>,
    pub config: ChartConfig,
}

impl BarChart {
    pub fn new(magnitudes: Vec<f32>) -> Self {
        Self { magnitudes, config: ChartConfig::default() }
    }

    pub fn from_source(source: &impl DataSource, config: ChartConfig) -> Self {
        Self { magnitudes: source.samples(), config }
    }

    /// Compute all drawable geometry for a `width` x `height` surface.
    /// Pure: touches no surface, and a failure never affects later calls.
    pub fn layout(&self, width: i32, height: i32) -> Result<ChartLayout, LayoutError> {
        let plot = plot_rect(width as f32, height as f32, self.config.padding)?;
        let bars = bar_rects(plot, self.config.bar_spacing, &self.magnitudes)?;
        let guides = guide_lines(plot, self.config.guide_divisions);
        log::debug!("layout: {} bars, {} guides in {:?}", bars.len(), guides.len(), plot);
        Ok(ChartLayout { plot, bars, guides })
    }

    /// Render into a raw RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !image.read_pixels(&info, &mut pixels, stride, (0, 0), skia::image::CachingHint::Disallow) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render to in-memory PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        canvas.clear(opts.theme.background);

        let layout = self.layout(opts.width, opts.height)?;

        // Decoration first, bars on top of it.
        draw_guide_lines(canvas, &layout, &opts.theme);
        draw_axis_lines(canvas, layout.plot, &opts.theme);
        draw_bars(canvas, &layout.bars, &opts.theme);
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_guide_lines(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let paint = stroke_paint(theme.guide_line, theme.guide_width);
    for &y in &layout.guides {
        canvas.draw_line((layout.plot.left, y), (layout.plot.right, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: Rect, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, theme.axis_width);

    // Y axis up the left edge, X axis along the bottom edge
    canvas.draw_line((plot.left, plot.bottom), (plot.left, plot.top), &paint);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
}

fn draw_bars(canvas: &skia::Canvas, bars: &[Rect], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.bar_fill);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    for bar in bars {
        let rect = skia::Rect::from_ltrb(bar.left, bar.top, bar.right, bar.bottom);
        canvas.draw_rect(rect, &paint);
    }
}
