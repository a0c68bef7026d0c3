use super::*;

use crate::compose::scene::NodeKind;
use crate::foundation::core::CanvasSize;
use crate::layout::metrics::section_metrics;

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new(format!("Item {i}"), "1 ea", format!("${i}.99")))
        .collect()
}

#[test]
fn returns_the_y_below_the_section() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    let m = section_metrics(4, 1.0, 0.0);
    let bottom = push_section(&mut scene, "Grocery", &rows(4), &m, 300.0, &Theme::default());
    assert!((bottom - (300.0 + m.total_height)).abs() < 1e-9);
}

#[test]
fn zebra_stripes_cover_alternate_rows_only() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    let m = section_metrics(5, 1.0, 0.0);
    push_section(&mut scene, "Grocery", &rows(5), &m, 0.0, &Theme::default());

    // One header band plus stripes under rows 1 and 3.
    let bands = scene.nodes.iter().filter(|n| n.z == Z_BAND).count();
    assert_eq!(bands, 3);
}

#[test]
fn each_row_emits_its_three_columns() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    let m = section_metrics(2, 1.0, 0.0);
    push_section(&mut scene, "Meat", &rows(2), &m, 0.0, &Theme::default());

    let texts: Vec<(&str, TextAlign, f64)> = scene
        .nodes
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Text {
                content,
                align,
                origin,
                ..
            } => Some((content.as_str(), *align, origin.x)),
            _ => None,
        })
        .collect();

    // Title + 2 rows x 3 cells.
    assert_eq!(texts.len(), 7);
    assert_eq!(texts[0].0, "Meat");

    let (name, size, price) = (&texts[1], &texts[2], &texts[3]);
    assert_eq!(name.0, "Item 0");
    assert_eq!(size.0, "1 ea");
    assert_eq!(price.0, "$0.99");
    assert_eq!(name.1, TextAlign::Left);
    assert_eq!(size.1, TextAlign::Left);
    assert_eq!(price.1, TextAlign::Right);

    // Columns progress left to right; the price anchors near the right edge.
    assert!(name.2 < size.2);
    assert!(size.2 < price.2);
    assert!(price.2 > m.left + m.columns.name + m.columns.size);
    assert!(price.2 <= m.left + m.usable_width);
}

#[test]
fn row_text_uses_the_section_font_size() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    let m = section_metrics(1, 1.2, 0.0);
    push_section(&mut scene, "Produce", &rows(1), &m, 0.0, &Theme::default());

    let sizes: Vec<f64> = scene
        .nodes
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Text { content, size, .. } if content.starts_with("Item") => Some(*size),
            _ => None,
        })
        .collect();
    assert!(!sizes.is_empty());
    for s in sizes {
        assert!((s - m.font_size).abs() < 1e-9);
    }
}

#[test]
fn empty_section_still_draws_its_header() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    let m = section_metrics(0, 1.0, 0.0);
    let bottom = push_section(&mut scene, "Frozen Foods", &[], &m, 100.0, &Theme::default());
    assert!((bottom - (100.0 + m.header_height)).abs() < 1e-9);
    assert_eq!(scene.nodes.iter().filter(|n| n.z == Z_BAND).count(), 1);
}
