// File: crates/barchart-core/tests/layout.rs
// Purpose: Validate bar-layout geometry: tiling, spacing, magnitude mapping, guides, errors.

use barchart_core::{bar_rects, guide_lines, plot_rect, LayoutError, Rect};

const EPS: f32 = 1e-4;

#[test]
fn worked_example_two_bars() {
    let rect = Rect::from_ltrb(0.0, 0.0, 100.0, 50.0);
    let bars = bar_rects(rect, 2.0, &[0.5, 1.0]).unwrap();
    assert_eq!(bars.len(), 2);

    // (100 - 2*3) / 2 = 47 wide each
    assert!((bars[0].left - 2.0).abs() < EPS);
    assert!((bars[0].top - 25.0).abs() < EPS);
    assert!((bars[0].right - 49.0).abs() < EPS);
    assert!((bars[0].bottom - 50.0).abs() < EPS);

    assert!((bars[1].left - 51.0).abs() < EPS);
    assert!(bars[1].top.abs() < EPS);
    assert!((bars[1].right - 98.0).abs() < EPS);
    assert!((bars[1].bottom - 50.0).abs() < EPS);
}

#[test]
fn widths_and_gaps_tile_the_rect() {
    let rect = Rect::from_ltrb(10.0, 5.0, 310.0, 205.0);
    let spacing = 4.0;
    let mags = [0.1, 0.4, 0.9, 0.3, 0.7, 0.2, 0.55];
    let bars = bar_rects(rect, spacing, &mags).unwrap();

    let widths: f32 = bars.iter().map(|b| b.width()).sum();
    let gaps = spacing * (mags.len() as f32 + 1.0);
    assert!((widths + gaps - rect.width()).abs() < 1e-3);

    // trailing gap lands exactly on the right edge
    assert!((bars.last().unwrap().right + spacing - rect.right).abs() < 1e-3);
}

#[test]
fn spacing_is_uniform_and_contiguous() {
    let rect = Rect::from_ltrb(0.0, 0.0, 640.0, 480.0);
    let bars = bar_rects(rect, 6.0, &[0.2; 9]).unwrap();
    for pair in bars.windows(2) {
        assert!((pair[0].right - (pair[1].left - 6.0)).abs() < 1e-3);
    }
}

#[test]
fn magnitude_extremes_map_to_plot_edges() {
    let rect = Rect::from_ltrb(0.0, 10.0, 200.0, 110.0);
    let bars = bar_rects(rect, 0.0, &[1.0, 0.0]).unwrap();
    assert!((bars[0].top - rect.top).abs() < EPS);
    // magnitude 0.0 is a zero-height bar sitting on the baseline
    assert!((bars[1].top - rect.bottom).abs() < EPS);
    for b in &bars {
        assert!((b.bottom - rect.bottom).abs() < EPS);
    }
}

#[test]
fn out_of_range_magnitudes_are_not_rejected() {
    let rect = Rect::from_ltrb(0.0, 0.0, 100.0, 100.0);
    let bars = bar_rects(rect, 0.0, &[1.5, -0.25]).unwrap();
    assert!(bars[0].top < rect.top, "overshooting bar extends above the plot");
    assert!(bars[1].top > rect.bottom, "negative magnitude dips below the baseline");
}

#[test]
fn empty_dataset_is_a_precondition_violation() {
    let rect = Rect::from_ltrb(0.0, 0.0, 100.0, 100.0);
    assert_eq!(bar_rects(rect, 2.0, &[]), Err(LayoutError::EmptyData));
}

#[test]
fn guide_lines_count_and_order() {
    let rect = Rect::from_ltrb(0.0, 20.0, 100.0, 120.0);
    let ys = guide_lines(rect, 10);
    assert_eq!(ys.len(), 10);
    assert!((ys[0] - rect.top).abs() < EPS);
    for pair in ys.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    // bottom edge excluded; steps of height/divisions
    assert!(*ys.last().unwrap() < rect.bottom - EPS);
    assert!((ys[1] - ys[0] - 10.0).abs() < EPS);
}

#[test]
fn zero_divisions_yields_no_guides() {
    let rect = Rect::from_ltrb(0.0, 0.0, 50.0, 50.0);
    assert!(guide_lines(rect, 0).is_empty());
}

#[test]
fn plot_rect_applies_uniform_padding() {
    let rect = plot_rect(200.0, 100.0, 10.0).unwrap();
    assert_eq!(rect, Rect::from_ltrb(10.0, 10.0, 190.0, 90.0));
    assert!(!rect.is_empty());
}

#[test]
fn plot_rect_rejects_consuming_padding() {
    assert!(matches!(
        plot_rect(100.0, 40.0, 20.0),
        Err(LayoutError::DegenerateArea { .. })
    ));
    assert!(matches!(
        plot_rect(30.0, 200.0, 15.0),
        Err(LayoutError::DegenerateArea { .. })
    ));
    // one pixel of slack is enough
    assert!(plot_rect(100.0, 41.0, 20.0).is_ok());
}
