use super::*;
use crate::{Margins, new_canvas};

const BAND: Rgba8 = Rgba8::new(0, 0, 100, 100);
const GRID: Rgba8 = Rgba8::new(250, 120, 200, 200);

fn framed(duration: f64) -> Canvas {
    Canvas::new(1800, 400)
        .with_margins(Margins::uniform(50))
        .with_duration(duration)
}

fn is_clear(c: &Canvas, x: u32, y: u32) -> bool {
    c.pixel(x, y) == Some([0, 0, 0, 0])
}

#[test]
fn highlight_fills_mapped_columns() {
    let mut c = framed(10.0);
    highlight_range(&mut c, 2.0, 4.0, BAND).unwrap();
    let y = 200;
    assert!(is_clear(&c, 50 + 339, y));
    assert_eq!(c.pixel(50 + 340, y), Some(BAND.premultiplied()));
    assert_eq!(c.pixel(50 + 679, y), Some(BAND.premultiplied()));
    assert!(is_clear(&c, 50 + 680, y));
    // band spans exactly the drawable height
    assert!(is_clear(&c, 50 + 400, 49));
    assert_eq!(c.pixel(50 + 400, 50), Some(BAND.premultiplied()));
    assert_eq!(c.pixel(50 + 400, 349), Some(BAND.premultiplied()));
    assert!(is_clear(&c, 50 + 400, 350));
}

#[test]
fn highlight_labels_sit_above_the_area() {
    let mut c = framed(10.0);
    highlight_range(&mut c, 2.0, 4.0, BAND).unwrap();
    let label_rows = 37..45;
    let near = |x0: u32| {
        (x0 - 20..x0 + 20).any(|x| label_rows.clone().any(|y| !is_clear(&c, x, y)))
    };
    assert!(near(390));
    assert!(near(730));
    assert!(!near(1200));
}

#[test]
fn reversed_range_fails_and_leaves_canvas_untouched() {
    let mut c = framed(10.0);
    highlight_range(&mut c, 1.0, 2.0, BAND).unwrap();
    let before = c.clone();
    let err = highlight_range(&mut c, 5.0, 2.0, BAND).unwrap_err();
    assert!(matches!(err, WaveformError::InvalidRange(_)));
    assert_eq!(c, before);
}

#[test]
fn out_of_clip_ranges_fail() {
    let mut c = framed(10.0);
    for (t0, t1) in [(-0.5, 2.0), (2.0, 10.5), (11.0, 12.0), (f64::NAN, 1.0)] {
        let err = highlight_range(&mut c, t0, t1, BAND).unwrap_err();
        assert!(matches!(err, WaveformError::InvalidRange(_)), "{t0}..{t1}");
    }
    let mut no_duration = new_canvas(100, 100);
    assert!(highlight_range(&mut no_duration, 0.0, 0.0, BAND).is_err());
}

#[test]
fn full_range_highlight_reaches_right_edge() {
    let mut c = framed(10.0);
    highlight_range_styled(&mut c, 0.0, 10.0, &HighlightStyle::default()).unwrap();
    let fill = HighlightStyle::default().fill.premultiplied();
    assert_eq!(c.pixel(50, 200), Some(fill));
    assert_eq!(c.pixel(1749, 200), Some(fill));
    assert!(is_clear(&c, 1750, 200));
}

#[test]
fn segment_width_follows_duration() {
    assert_eq!(segment_width(1700, 1.0, 0.1), 170);
    assert_eq!(segment_width(1700, 10.0, 0.1), 17);
    assert_eq!(segment_width(10, 100.0, 0.1), 1);
}

#[test]
fn wide_segments_get_strip_labels_and_ruler() {
    let mut c = framed(1.0);
    draw_segment_grid(&mut c, 0.1, GRID).unwrap();
    let strip_y = 50 + 300 - 1;
    assert_eq!(c.pixel(51, strip_y), Some(Rgba8::gray(100).premultiplied()));
    assert_eq!(c.pixel(50 + 170, strip_y), Some(Rgba8::gray(200).premultiplied()));
    assert_eq!(c.pixel(50 + 340, strip_y), Some(Rgba8::gray(100).premultiplied()));
    assert!(is_clear(&c, 51, 50 + 300 - 4));

    let grid = GRID.premultiplied();
    // boundary tick below the area
    assert_eq!(c.pixel(50 + 170, 350), Some(grid));
    assert_eq!(c.pixel(50 + 170, 354), Some(grid));
    // ruler from one row above the area to one row below
    assert_eq!(c.pixel(50, 49), Some(grid));
    assert_eq!(c.pixel(50, 200), Some(grid));
    // decile tick pointing left
    assert_eq!(c.pixel(46, 50 + 29), Some(grid));
    assert!(is_clear(&c, 46, 50 + 30));
    // a time label under the first boundary
    assert!((362..370).any(|y| (40..60).any(|x| !is_clear(&c, x, y))));
}

#[test]
fn narrow_segments_suppress_labels() {
    let mut c = framed(10.0);
    draw_segment_grid(&mut c, 0.1, GRID).unwrap();
    assert_eq!(c.pixel(50 + 17, 349), Some(Rgba8::gray(200).premultiplied()));
    assert!(is_clear(&c, 50, 49));
    assert!(is_clear(&c, 46, 50 + 29));
    assert!((351..400).all(|y| (0..1800).all(|x| is_clear(&c, x, y))));
}

#[test]
fn bad_segment_inputs_fail_without_drawing() {
    let mut c = framed(1.0);
    let before = c.clone();
    for seg in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = draw_segment_grid(&mut c, seg, GRID).unwrap_err();
        assert!(matches!(err, WaveformError::InvalidRange(_)));
    }
    let mut no_duration = new_canvas(100, 100);
    assert!(draw_segment_grid(&mut no_duration, 0.1, GRID).is_err());
    assert_eq!(c, before);
}

#[test]
fn label_is_centered_on_anchor() {
    let mut c = new_canvas(100, 20);
    draw_label(&mut c, Rgba8::WHITE, 50, 15, "0");
    let xs: Vec<u32> = (0..100)
        .filter(|&x| (0..20).any(|y| !is_clear(&c, x, y)))
        .collect();
    // one 8 px cell starting 4 px left of the anchor
    let (first, last) = (xs[0], xs[xs.len() - 1]);
    assert!(first >= 46 && first < 50, "{first}");
    assert!(last > 50 && last < 54, "{last}");
}

#[test]
fn grid_on_unframed_canvas_clips_offscreen_marks() {
    let mut c = new_canvas(600, 100).with_duration(1.0);
    draw_segment_grid(&mut c, 0.5, GRID).unwrap();
    assert_eq!(c.pixel(0, 0), Some(GRID.premultiplied()));
}
