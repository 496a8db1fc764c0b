// File: crates/barchart-examples/src/bin/bars.rs
// Summary: Minimal example that renders a simple bar chart to PNG.

use barchart_core::{BarChart, ChartConfig, RenderOptions};

fn main() {
    let magnitudes = vec![0.2, 0.45, 0.8, 0.6, 1.0, 0.35, 0.7];

    let mut chart = BarChart::new(magnitudes);
    chart.config = ChartConfig { padding: 32.0, bar_spacing: 10.0, guide_divisions: 10 };

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_bars.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
