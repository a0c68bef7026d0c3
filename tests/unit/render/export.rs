use super::*;

use crate::model::data::Row;

#[test]
fn render_template_targets_export_resolution() {
    let frame = render_template(
        Template::Grocery,
        &FlyerData::default(),
        &Theme::default(),
        &ImageBank::empty(),
        &FontCatalog::empty(),
    )
    .unwrap();
    assert_eq!((frame.width, frame.height), (3000, 4200));
}

#[test]
fn export_png_produces_a_png_at_full_size() {
    let mut data = FlyerData::default();
    data.grocery = vec![Row::new("Rice", "2 lb", "$3.49")];

    let png = export_png(
        Template::Grocery,
        &data,
        &Theme::default(),
        &ImageBank::empty(),
        &FontCatalog::empty(),
    )
    .unwrap();
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (3000, 4200));
}

#[test]
fn export_all_keeps_template_order_and_isolation() {
    let results = export_all(
        &FlyerData::default(),
        &Theme::default(),
        &ImageBank::empty(),
        &FontCatalog::empty(),
    );
    let order: Vec<Template> = results.iter().map(|(t, _)| *t).collect();
    assert_eq!(order, Template::ALL.to_vec());
    for (template, result) in results {
        let png = result.unwrap_or_else(|e| panic!("{template:?} failed: {e}"));
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
