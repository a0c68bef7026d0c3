use super::*;

#[test]
fn empty_catalog_resolves_nothing() {
    let catalog = FontCatalog::empty();
    assert!(catalog.is_empty());
    assert!(catalog.resolve("Archivo").is_none());
}

#[test]
fn resolve_is_case_insensitive() {
    let catalog = FontCatalog::with_face("Archivo", vec![0u8; 4]);
    assert_eq!(catalog.resolve("archivo").unwrap().family, "Archivo");
    assert_eq!(catalog.resolve("ARCHIVO").unwrap().family, "Archivo");
}

#[test]
fn unknown_family_falls_back_to_the_first_face() {
    let mut catalog = FontCatalog::with_face("Archivo", vec![1u8]);
    catalog.add_face("Inter", vec![2u8]);
    assert_eq!(catalog.resolve("Comic Sans").unwrap().family, "Archivo");
    assert_eq!(catalog.resolve("inter").unwrap().family, "Inter");
}

#[test]
fn families_lists_registered_names() {
    let mut catalog = FontCatalog::with_face("Archivo", vec![1u8]);
    catalog.add_face("Inter", vec![2u8]);
    assert_eq!(catalog.families(), vec!["Archivo", "Inter"]);
}

#[test]
fn scan_ignores_non_font_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not a font").unwrap();
    std::fs::write(dir.path().join("data.json"), b"{}").unwrap();
    let catalog = FontCatalog::scan_dir(dir.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn scan_skips_unparsable_font_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.ttf"), b"garbage").unwrap();
    let catalog = FontCatalog::scan_dir(dir.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn scan_errors_on_a_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(FontCatalog::scan_dir(&missing).is_err());
}
