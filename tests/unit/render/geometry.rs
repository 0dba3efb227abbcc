use super::*;

fn assert_tiles(total: u64, width: u32) {
    let mut expected_start = 0u64;
    for (x, w) in column_windows(total, width) {
        assert_eq!(w.start, expected_start, "gap/overlap at column {x}");
        assert!(w.start <= w.end);
        expected_start = w.end;
    }
    assert_eq!(expected_start, total);
    assert_eq!(column_window(total, width, 0).start, 0);
    assert_eq!(column_window(total, width, width - 1).end, total);
}

#[test]
fn windows_tile_the_sample_range() {
    for (total, width) in [
        (48_000u64, 1800u32),
        (48_000, 100_000),
        (1, 1),
        (7, 3),
        (0, 5),
        (1_000_003, 997),
    ] {
        assert_tiles(total, width);
    }
}

#[test]
fn windows_do_not_overflow_on_huge_inputs() {
    assert_tiles(u64::MAX, 4096);
    let last = column_window(u64::MAX, 4096, 4095);
    assert_eq!(last.end, u64::MAX);
}

#[test]
fn window_size_matches_linear_mapping() {
    // ~26.7 samples per column
    let w = column_window(48_000, 1800, 1);
    assert_eq!(w, 26..53);
    let sizes: Vec<u64> = column_windows(48_000, 1800)
        .map(|(_, w)| w.end - w.start)
        .collect();
    assert!(sizes.iter().all(|&n| n == 26 || n == 27));
}

#[test]
fn too_many_columns_leave_empty_windows() {
    let empty = column_windows(48_000, 100_000)
        .filter(|(_, w)| w.is_empty())
        .count();
    assert_eq!(empty, 100_000 - 48_000);
}

#[test]
fn out_of_range_column_is_empty() {
    assert!(column_window(10, 5, 5).is_empty());
    assert!(column_window(10, 0, 0).is_empty());
    assert_eq!(column_windows(10, 4).len(), 4);
}

#[test]
fn symmetric_span_is_centered() {
    assert_eq!(envelope_rows(0.5, 1.0, 100, false), 25..75);
    assert_eq!(envelope_rows(1.0, 1.0, 100, false), 0..100);
}

#[test]
fn mirrored_span_is_anchored_to_bottom() {
    assert_eq!(envelope_rows(0.5, 1.0, 100, true), 75..100);
    for e in [0.01f32, 0.3, 0.9, 1.0, 4.0] {
        let rows = envelope_rows(e, 1.0, 250, true);
        assert_eq!(rows.end, 250);
    }
}

#[test]
fn zero_extent_draws_nothing() {
    assert!(envelope_rows(0.0, 1.0, 100, false).is_empty());
    assert!(envelope_rows(0.0, 3.0, 100, true).is_empty());
    assert!(envelope_rows(f32::NAN, 1.0, 100, false).is_empty());
}

#[test]
fn zoom_is_clamped_to_the_area() {
    assert_eq!(envelope_rows(0.9, 10.0, 100, false), 0..100);
    assert_eq!(envelope_rows(0.9, 10.0, 100, true), 0..100);
    assert_eq!(envelope_rows(f32::INFINITY, 1.0, 100, false), 0..100);
}

#[test]
fn zoom_never_shrinks_the_span() {
    let mut prev = 0u32;
    for step in 1..40 {
        let zoom = step as f32 * 0.25;
        let rows = envelope_rows(0.37, zoom, 300, false);
        let len = rows.end - rows.start;
        assert!(len >= prev, "zoom {zoom} shrank span");
        prev = len;
    }
}
