use super::*;

use crate::compose::scene::NodeKind;
use crate::foundation::core::CanvasSize;
use crate::model::theme::Theme;

fn header_scene() -> Scene {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    push_header(&mut scene, &StoreInfo::default(), &Theme::default());
    scene
}

fn text_contents(scene: &Scene) -> Vec<String> {
    scene
        .nodes
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn header_starts_with_a_full_canvas_background() {
    let scene = header_scene();
    let first = &scene.nodes[0];
    assert_eq!(first.z, Z_BACKGROUND);
    let NodeKind::Fill { path, .. } = &first.kind else {
        panic!("background is not a fill");
    };
    let bbox = kurbo::Shape::bounding_box(path);
    assert_eq!(bbox.width(), LOGICAL_WIDTH);
    assert_eq!(bbox.height(), LOGICAL_HEIGHT);
}

#[test]
fn scallops_cover_the_full_width_with_overhang() {
    let scene = header_scene();
    let scallops: Vec<_> = scene.nodes.iter().filter(|n| n.z == Z_SCALLOP).collect();
    let expected = (LOGICAL_WIDTH / SCALLOP_BAND_WIDTH).ceil() as usize + 2;
    assert_eq!(scallops.len(), expected);

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    for node in &scallops {
        let NodeKind::Fill { path, .. } = &node.kind else {
            panic!("scallop is not a fill");
        };
        let bbox = kurbo::Shape::bounding_box(path);
        min_x = min_x.min(bbox.x0);
        max_x = max_x.max(bbox.x1);
        // Scallops hang just below the band.
        assert!(bbox.y1 > HEADER_HEIGHT);
        assert!(bbox.y0 >= HEADER_HEIGHT - 1e-6);
    }
    assert!(min_x <= 0.0);
    assert!(max_x >= LOGICAL_WIDTH);
}

#[test]
fn header_carries_the_store_copy() {
    let scene = header_scene();
    let texts = text_contents(&scene);
    let store = StoreInfo::default();
    assert!(texts.contains(&store.name));
    assert!(texts.contains(&store.label_lines[0]));
    assert!(texts.contains(&store.label_lines[1]));
    assert!(texts.contains(&store.date_range));
}

#[test]
fn footer_band_hugs_the_bottom_edge() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    push_footer(&mut scene, &StoreInfo::default(), &Theme::default());

    let band = scene
        .nodes
        .iter()
        .find(|n| n.z == Z_BAND)
        .expect("footer band missing");
    let NodeKind::Fill { path, .. } = &band.kind else {
        panic!("footer band is not a fill");
    };
    let bbox = kurbo::Shape::bounding_box(path);
    assert!((bbox.y0 - (LOGICAL_HEIGHT - FOOTER_HEIGHT)).abs() < 1e-6);
    assert!((bbox.y1 - LOGICAL_HEIGHT).abs() < 1e-6);

    let texts = text_contents(&scene);
    let store = StoreInfo::default();
    assert!(texts.contains(&store.hours));
    assert!(texts.contains(&store.address));
}

#[test]
fn footer_stacks_two_centered_lines_in_one_column() {
    let mut scene = Scene::new(CanvasSize::LOGICAL);
    push_footer(&mut scene, &StoreInfo::default(), &Theme::default());

    let lines: Vec<_> = scene
        .nodes
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Text {
                origin,
                size,
                align,
                max_width,
                ..
            } => Some((*origin, *size, *align, *max_width)),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 2);

    let column = LOGICAL_WIDTH * FOOTER_COLUMN_FRAC;
    let expected_size = FOOTER_BASE_FONT / FOOTER_COLUMN_FRAC;
    for (origin, size, align, max_width) in &lines {
        assert!((origin.x - LOGICAL_WIDTH * 0.5).abs() < 1e-6);
        assert!((size - expected_size).abs() < 1e-9);
        assert_eq!(*align, TextAlign::Center);
        assert_eq!(*max_width, Some(column));
        // Both lines sit inside the band.
        assert!(origin.y > LOGICAL_HEIGHT - FOOTER_HEIGHT);
        assert!(origin.y + size < LOGICAL_HEIGHT);
    }
    // Hours above address.
    assert!(lines[0].0.y < lines[1].0.y);
}

#[test]
fn body_sits_between_header_and_footer() {
    let body = body_rect();
    assert!(body.y0 > HEADER_HEIGHT);
    assert!((body.y1 - (LOGICAL_HEIGHT - FOOTER_HEIGHT)).abs() < 1e-6);
    assert_eq!(body.x0, 0.0);
    assert_eq!(body.x1, LOGICAL_WIDTH);
}
