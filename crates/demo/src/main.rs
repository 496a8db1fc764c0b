// File: crates/demo/src/main.rs
// Summary: Demo generates a random sample set and renders one PNG per theme preset.

use anyhow::{Context, Result};
use barchart_core::theme;
use barchart_core::{BarChart, ChartConfig, DataSource, RenderOptions, UniformRandom};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    // Optional theme name from CLI; "all" (default) renders every preset.
    let wanted = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());

    let source = UniformRandom::default();
    let magnitudes = source.samples();
    log::info!("generated {} samples", magnitudes.len());

    let mut chart = BarChart::new(magnitudes);
    chart.config = ChartConfig { padding: 32.0, bar_spacing: 12.0, guide_divisions: 10 };

    let themes = if wanted.eq_ignore_ascii_case("all") {
        theme::presets()
    } else {
        vec![theme::find(&wanted)]
    };

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("creating target/out")?;

    for t in themes {
        let opts = RenderOptions { theme: t, ..RenderOptions::default() };
        let out = out_dir.join(format!("bars_{}.png", t.name));
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("rendering theme '{}'", t.name))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}
