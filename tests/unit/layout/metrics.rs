use super::*;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn density_is_full_for_small_tables() {
    assert_eq!(density_scale(0), DENSITY_MAX);
    assert_eq!(density_scale(1), DENSITY_MAX);
    assert_eq!(density_scale(30), DENSITY_MAX);
}

#[test]
fn density_bottoms_out_for_crowded_tables() {
    assert_eq!(density_scale(36), DENSITY_MIN);
    assert_eq!(density_scale(500), DENSITY_MIN);
}

#[test]
fn density_never_increases_with_row_count() {
    let mut prev = f64::INFINITY;
    for rows in 0..100 {
        let d = density_scale(rows);
        assert!(d <= prev, "density rose at {rows} rows");
        assert!((DENSITY_MIN..=DENSITY_MAX).contains(&d));
        prev = d;
    }
}

#[test]
fn row_height_shrinks_but_stays_bounded() {
    let few = section_metrics(3, 1.0, 0.0);
    let many = section_metrics(60, 1.0, 0.0);
    assert!(many.row_height < few.row_height);
    approx(few.row_height, BASE_ROW_HEIGHT * ROW_LEADING);
    approx(many.row_height, BASE_ROW_HEIGHT * ROW_LEADING * DENSITY_MIN);
}

#[test]
fn font_size_tracks_row_height() {
    let m = section_metrics(10, 1.1, 0.0);
    approx(m.font_size, m.row_height * ROW_FONT_RATIO);
}

#[test]
fn columns_partition_the_usable_width_exactly() {
    for usable in [0.0, 1.0, 733.37, 1404.0] {
        let c = partition_columns(usable);
        approx(c.total(), usable);
        assert!(c.name >= 0.0 && c.size >= 0.0 && c.price >= 0.0);
    }
}

#[test]
fn section_width_respects_margin_and_inset() {
    let m = section_metrics(5, 1.0, 18.0);
    approx(m.left, CANVAS_MARGIN + 18.0);
    approx(m.usable_width, LOGICAL_WIDTH - 2.0 * (CANVAS_MARGIN + 18.0));
    approx(m.columns.total(), m.usable_width);
}

#[test]
fn total_height_sums_header_and_rows() {
    let m = section_metrics(7, 1.0, 0.0);
    approx(m.total_height, m.header_height + 7.0 * m.row_height);
}

#[test]
fn stacking_spaces_sections_by_half_a_row() {
    let stacked = stack_sections(&[3, 5, 2], 1.0, 0.0);
    assert_eq!(stacked.len(), 3);

    // All three counts sit below the density knee, so row heights match.
    let rh = BASE_ROW_HEIGHT * ROW_LEADING;
    let header = SECTION_HEADER_HEIGHT;

    approx(stacked[0].offset_y, 0.0);
    let first_total = header + 3.0 * rh;
    approx(stacked[1].offset_y, first_total + rh * 0.5);
    let second_total = header + 5.0 * rh;
    approx(
        stacked[2].offset_y,
        first_total + rh * 0.5 + second_total + rh * 0.5,
    );
}

#[test]
fn stacking_handles_empty_input() {
    assert!(stack_sections(&[], 1.0, 0.0).is_empty());
}

#[test]
fn contain_fit_letterboxes_wide_content() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    let fit = contain_fit(area, 200.0, 100.0);
    approx(fit.width(), 100.0);
    approx(fit.height(), 50.0);
    approx(fit.center().x, 50.0);
    approx(fit.center().y, 50.0);
}

#[test]
fn contain_fit_pillarboxes_tall_content() {
    let area = Rect::new(10.0, 10.0, 110.0, 60.0);
    let fit = contain_fit(area, 50.0, 100.0);
    approx(fit.height(), 50.0);
    approx(fit.width(), 25.0);
    approx(fit.center().x, area.center().x);
}

#[test]
fn contain_fit_degenerate_size_yields_empty_rect() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    for (w, h) in [(0.0, 10.0), (10.0, 0.0), (f64::NAN, 10.0), (-5.0, 5.0)] {
        let fit = contain_fit(area, w, h);
        assert_eq!(fit.width(), 0.0);
        assert_eq!(fit.height(), 0.0);
    }
}
