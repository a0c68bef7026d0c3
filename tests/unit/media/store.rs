use super::*;

fn upload(name: &str) -> (String, String, Vec<u8>) {
    (name.to_string(), "image/png".to_string(), vec![1, 2, 3])
}

#[test]
fn add_assigns_fresh_ids_and_timestamps() {
    let mut store = InMemoryMediaStore::new();
    let items = store.add(vec![upload("a.png"), upload("b.png")]);
    assert_eq!(items.len(), 2);
    assert_ne!(items[0].id, items[1].id);
    assert!(items[0].created_at < items[1].created_at);
    assert_eq!(items[0].size, 3);
}

#[test]
fn add_refuses_non_image_mime_per_item() {
    let mut store = InMemoryMediaStore::new();
    let items = store.add(vec![
        upload("ok.png"),
        ("doc.pdf".to_string(), "application/pdf".to_string(), vec![0]),
    ]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "ok.png");
}

#[test]
fn list_puts_bundled_assets_first() {
    let mut store = InMemoryMediaStore::with_bundled(vec![(
        "logo.png".to_string(),
        "image/png".to_string(),
        vec![9],
    )]);
    store.add(vec![upload("a.png")]);
    let items = store.list();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "logo.png");
    assert_eq!(items[1].name, "a.png");
}

#[test]
fn remove_is_idempotent_and_skips_bundled() {
    let mut store = InMemoryMediaStore::with_bundled(vec![(
        "logo.png".to_string(),
        "image/png".to_string(),
        vec![9],
    )]);
    let id = store.add(vec![upload("a.png")])[0].id.clone();
    assert!(store.remove(&id));
    assert!(!store.remove(&id));
    assert!(!store.remove("logo.png"));
    assert_eq!(store.list().len(), 1);
}

#[test]
fn rename_applies_to_uploads_only() {
    let mut store = InMemoryMediaStore::with_bundled(vec![(
        "logo.png".to_string(),
        "image/png".to_string(),
        vec![9],
    )]);
    let id = store.add(vec![upload("a.png")])[0].id.clone();
    assert!(store.rename(&id, "renamed.png"));
    assert!(!store.rename("logo.png", "nope.png"));
    let items = store.list();
    assert_eq!(items[0].name, "logo.png");
    assert_eq!(items[1].name, "renamed.png");
}

#[test]
fn resolve_honors_both_token_namespaces() {
    let mut store = InMemoryMediaStore::with_bundled(vec![(
        "logo.png".to_string(),
        "image/png".to_string(),
        vec![9],
    )]);
    let id = store.add(vec![upload("a.png")])[0].id.clone();

    let token = store.token_for(&id).unwrap();
    assert!(token.starts_with("media://"));
    assert_eq!(store.resolve(&token).unwrap().as_ref(), &vec![1, 2, 3]);

    let asset = store.token_for("logo.png").unwrap();
    assert_eq!(asset, "asset://logo.png");
    assert_eq!(store.resolve(&asset).unwrap().as_ref(), &vec![9]);

    assert!(store.resolve("media://missing").is_none());
    assert!(store.token_for("missing").is_none());
}

#[test]
fn media_item_serializes_with_camel_case_and_type() {
    let item = MediaItem {
        id: "m1".to_string(),
        name: "a.png".to_string(),
        mime: "image/png".to_string(),
        size: 3,
        created_at: 7,
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["type"], "image/png");
    assert_eq!(json["createdAt"], 7);
}

#[test]
fn pack_round_trips_uploads_with_fresh_ids() {
    let mut source = InMemoryMediaStore::new();
    let old_ids: Vec<String> = source
        .add(vec![upload("a.png"), upload("b.png")])
        .into_iter()
        .map(|i| i.id)
        .collect();

    let entries = export_pack(&source);
    assert_eq!(entries[0].0, PACK_INDEX_PATH);
    assert_eq!(entries.len(), 3);

    let mut target = InMemoryMediaStore::new();
    target.add(vec![upload("existing.png")]);
    let imported = import_pack(&mut target, &entries);
    assert_eq!(imported.len(), 2);
    for item in &imported {
        assert!(!old_ids.contains(&item.id), "imported id was not reassigned");
        assert_eq!(
            target.resolve(&target.token_for(&item.id).unwrap()).unwrap().as_ref(),
            &vec![1, 2, 3]
        );
    }
    assert_eq!(target.list().len(), 3);
}

#[test]
fn import_into_a_fresh_store_still_reassigns_ids() {
    // A brand-new store's ID sequence starts where the exporter's did, so
    // without retiring the manifest IDs the first import would alias them.
    let mut source = InMemoryMediaStore::new();
    let old_ids: Vec<String> = source
        .add(vec![upload("a.png"), upload("b.png")])
        .into_iter()
        .map(|i| i.id)
        .collect();

    let mut target = InMemoryMediaStore::new();
    let imported = import_pack(&mut target, &export_pack(&source));
    assert_eq!(imported.len(), 2);
    for item in &imported {
        assert!(!old_ids.contains(&item.id), "imported id was not reassigned");
    }
}

#[test]
fn removed_ids_are_never_reissued() {
    let mut store = InMemoryMediaStore::new();
    let first = store.add(vec![upload("a.png")])[0].id.clone();
    assert!(store.remove(&first));
    let ids: Vec<String> = store
        .add(vec![upload("b.png"), upload("c.png")])
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert!(!ids.contains(&first));
}

#[test]
fn import_skips_rows_missing_their_blob() {
    let mut source = InMemoryMediaStore::new();
    source.add(vec![upload("a.png"), upload("b.png")]);
    let mut entries = export_pack(&source);
    // Drop one blob but keep its manifest row.
    entries.remove(1);

    let mut target = InMemoryMediaStore::new();
    let imported = import_pack(&mut target, &entries);
    assert_eq!(imported.len(), 1);
}

#[test]
fn import_without_manifest_is_a_no_op() {
    let mut target = InMemoryMediaStore::new();
    let imported = import_pack(
        &mut target,
        &[("media/m1-a.png".to_string(), vec![1])],
    );
    assert!(imported.is_empty());
    assert!(target.list().is_empty());
}

#[test]
fn bundled_exports_are_excluded_from_packs() {
    let store = InMemoryMediaStore::with_bundled(vec![(
        "logo.png".to_string(),
        "image/png".to_string(),
        vec![9],
    )]);
    let entries = export_pack(&store);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, PACK_INDEX_PATH);
}
