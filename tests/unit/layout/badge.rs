use super::*;

use crate::model::theme::{BadgeStyle, Theme};

fn theme_with(style: BadgeStyle) -> Theme {
    let mut t = Theme::default();
    t.badge_style = style;
    t
}

#[test]
fn scale_buckets_by_digit_count() {
    assert_eq!(badge_scale("$9"), 0.96);
    assert_eq!(badge_scale("$9.99"), 0.96);
    assert_eq!(badge_scale("$19.99"), 1.06);
    assert_eq!(badge_scale("$199.99"), 1.16);
    assert_eq!(badge_scale("$1234.56"), 1.28);
    assert_eq!(badge_scale("$12345.67"), 1.28);
}

#[test]
fn symbols_and_separators_do_not_inflate_the_bucket() {
    // Three digits regardless of the surrounding punctuation.
    assert_eq!(badge_scale("$5.00"), badge_scale("500"));
    assert!((0.96..=1.06).contains(&badge_scale("$5.00")));
}

#[test]
fn width_follows_the_bucketed_scale() {
    let t = Theme::default();
    let spec = badge_spec("$1234.56", &t);
    assert!((spec.width - BADGE_BASE_WIDTH * 1.28).abs() < 1e-9);
    assert!((spec.height - BADGE_BASE_HEIGHT * 1.28).abs() < 1e-9);
}

#[test]
fn long_prices_use_the_smaller_base_font() {
    let t = Theme::default();
    let short = badge_spec("$9", &t);
    let long = badge_spec("$199.99", &t);
    assert!((short.font_size - BADGE_FONT_SHORT * 0.96).abs() < 1e-9);
    assert!((long.font_size - BADGE_FONT_LONG * 1.16).abs() < 1e-9);
}

#[test]
fn every_style_yields_a_closed_nonempty_shape() {
    use kurbo::PathEl;
    for style in [
        BadgeStyle::Starburst,
        BadgeStyle::Pill,
        BadgeStyle::Badge,
        BadgeStyle::Sticker,
    ] {
        let spec = badge_spec("$4.99", &theme_with(style));
        let els: Vec<PathEl> = spec.shape.elements().to_vec();
        assert!(els.len() > 2, "{style:?} produced a trivial path");
        assert!(
            els.iter().any(|e| matches!(e, PathEl::ClosePath)),
            "{style:?} path is not closed"
        );
    }
}

#[test]
fn starburst_alternates_outer_and_inner_radii() {
    let spec = badge_spec("$2", &theme_with(BadgeStyle::Starburst));
    let bbox = kurbo::Shape::bounding_box(&spec.shape);
    // Outer ellipse extends past the nominal badge box.
    assert!(bbox.width() > spec.width);
    assert!(bbox.height() > spec.height);
    // Centered on the origin.
    assert!(bbox.center().x.abs() < 1e-6);
    assert!(bbox.center().y.abs() < 1e-6);
}

#[test]
fn sticker_is_a_circle_sized_by_the_longer_edge() {
    let spec = badge_spec("$4.99", &theme_with(BadgeStyle::Sticker));
    let bbox = kurbo::Shape::bounding_box(&spec.shape);
    let expected = spec.width.max(spec.height) / STICKER_DIVISOR * 2.0;
    assert!((bbox.width() - expected).abs() < 0.5);
    assert!((bbox.height() - expected).abs() < 0.5);
}

#[test]
fn colors_come_from_the_theme() {
    let t = Theme::default();
    let spec = badge_spec("$1", &t);
    assert_eq!(spec.fill, t.badge.background);
    assert_eq!(spec.text_color, t.badge.text);
}
