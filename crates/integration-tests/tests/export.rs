//! Integration tests for backups and inquiry links.

use catalogo_core::{CatalogDocument, CategoryId, FieldEdit, ProductId, SettingField};
use catalogo_editor::{BACKUP_FILE_NAME, export_json, inquiry_link, write_backup};
use catalogo_integration_tests::open_store;

#[test]
fn test_backup_matches_stored_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(&dir.path().join("data")).unwrap();
    store
        .edit_field(FieldEdit::Setting(SettingField::Title("BACKUP".into())))
        .unwrap();

    let out = dir.path().join("backups");
    let path = write_backup(store.document(), &out).unwrap();
    assert_eq!(path, out.join(BACKUP_FILE_NAME));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, export_json(store.document()).unwrap());
    assert!(raw.contains("\n  \"season\": \"winter\""));

    let restored: CatalogDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(&restored, store.document());
}

#[test]
fn test_inquiry_link_uses_current_contact_and_price() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open_store(dir.path()).unwrap();
    store
        .edit_field(FieldEdit::Setting(SettingField::ContactNumber(
            "+51 911-222-333".into(),
        )))
        .unwrap();

    let doc = store.document();
    let product = doc
        .find_product(&CategoryId::new("w1"), &ProductId::new("p2"))
        .unwrap();
    let link = inquiry_link("https://wa.me/", &doc.contact_number, product);

    assert!(link.starts_with("https://wa.me/51911222333?text="));
    // 320 with 20% off.
    assert!(link.contains("S%2F%20256"));
    assert!(!link.contains(' '));
}
