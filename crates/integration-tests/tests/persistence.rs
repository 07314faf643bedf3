//! Integration tests for catalog persistence on disk.

use catalogo_core::{
    CatalogDocument, CategoryId, DiscountPercent, FieldEdit, Price, ProductField, ProductId,
    Season, SettingField,
};
use catalogo_editor::{
    AlwaysConfirm, CatalogStore, EditorConfig, FileStorage, KeyValueStorage,
};
use catalogo_integration_tests::open_store;
use rust_decimal::Decimal;

const KEY: &str = "catalogo_pro_data_v4";

// =============================================================================
// First Run
// =============================================================================

#[test]
fn test_first_run_writes_default_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path()).unwrap();

    assert_eq!(store.document(), &CatalogDocument::default());

    let path = dir.path().join(format!("{KEY}.json"));
    let raw = std::fs::read_to_string(path).unwrap();
    let stored: CatalogDocument = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, CatalogDocument::default());
}

#[test]
fn test_corrupt_file_is_replaced_by_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{KEY}.json")), "{\"season\": 42").unwrap();

    let store = open_store(dir.path()).unwrap();
    assert_eq!(store.document(), &CatalogDocument::default());

    let raw = FileStorage::new(dir.path()).get(KEY).unwrap().unwrap();
    assert!(serde_json::from_str::<CatalogDocument>(&raw).is_ok());
}

// =============================================================================
// Reopening
// =============================================================================

#[test]
fn test_edits_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let w1 = CategoryId::new("w1");

    let (new_category, new_product) = {
        let mut store = open_store(dir.path()).unwrap();
        store.switch_season(Season::Summer).unwrap();
        store.switch_season(Season::Winter).unwrap();
        let category = store.add_category().unwrap();
        let product = store.add_product(&w1).unwrap().unwrap();
        store
            .edit_field(FieldEdit::Product {
                category_id: w1.clone(),
                product_id: product.clone(),
                field: ProductField::BasePrice(Price::new(Decimal::new(4990, 2))),
            })
            .unwrap();
        store
            .set_discount(&w1, &product, DiscountPercent::new(10))
            .unwrap();
        store
            .edit_field(FieldEdit::Setting(SettingField::ContactNumber(
                "51911222333".into(),
            )))
            .unwrap();
        (category, product)
    };

    let store = open_store(dir.path()).unwrap();
    let doc = store.document();
    assert_eq!(doc.season, Season::Winter);
    assert_eq!(doc.contact_number, "51911222333");
    assert!(doc.find_category(&new_category).is_some());

    let product = doc.find_product(&w1, &new_product).unwrap();
    assert_eq!(product.base_price.amount(), Decimal::new(4990, 2));
    assert!(product.has_discount());
    assert_eq!(product.final_price().amount(), Decimal::new(4491, 2));
}

#[test]
fn test_deletions_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open_store(dir.path()).unwrap();
        store
            .delete_product(&CategoryId::new("w1"), &ProductId::new("p2"), &mut AlwaysConfirm)
            .unwrap();
        store
            .delete_category(&CategoryId::new("w2"), &mut AlwaysConfirm)
            .unwrap();
    }

    let store = open_store(dir.path()).unwrap();
    let active = store.active_categories();
    assert_eq!(active.len(), 1);
    assert_eq!(active.first().unwrap().products.len(), 1);
    assert_eq!(store.document().summer, CatalogDocument::default().summer);
}

#[test]
fn test_custom_storage_key_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().into_owned();
    let config = EditorConfig::from_lookup(|name| match name {
        "CATALOGO_DATA_DIR" => Some(data_dir.clone()),
        "CATALOGO_STORAGE_KEY" => Some("tienda_v1".to_owned()),
        _ => None,
    })
    .unwrap();

    let mut store = CatalogStore::from_config(&config).unwrap();
    store.switch_season(Season::Summer).unwrap();

    assert!(dir.path().join("tienda_v1.json").exists());
    assert!(!dir.path().join(format!("{KEY}.json")).exists());

    let reopened = CatalogStore::from_config(&config).unwrap();
    assert_eq!(reopened.document().season, Season::Summer);
}

// =============================================================================
// Wire Format
// =============================================================================

#[test]
fn test_reads_catalog_saved_by_web_version() {
    let dir = tempfile::tempdir().unwrap();
    let saved = r##"{
        "season": "summer",
        "whatsapp": "51987654321",
        "wsText": "Escríbenos",
        "wsColor": "#000000",
        "logo": "https://example.com/logo.png",
        "title": "TIENDA",
        "subtitle": "Sub",
        "winter": [],
        "summer": [{
            "id": "s1",
            "name": "TOALLAS",
            "icon": "https://example.com/icon.png",
            "products": [{
                "id": "t1",
                "name": "Toalla Grande",
                "description": "Algodón egipcio",
                "basePrice": 45.9,
                "hasDiscount": true,
                "discountValue": 10,
                "thumb": "https://example.com/t1.jpg"
            }]
        }]
    }"##;
    std::fs::write(dir.path().join(format!("{KEY}.json")), saved).unwrap();

    let store = open_store(dir.path()).unwrap();
    let doc = store.document();
    assert_eq!(doc.season, Season::Summer);
    assert_eq!(doc.title, "TIENDA");

    let product = store
        .find_product(&CategoryId::new("s1"), &ProductId::new("t1"))
        .unwrap();
    assert_eq!(product.base_price.amount(), Decimal::new(459, 1));
    assert_eq!(product.final_price().to_string(), "S/ 41.31");
}

#[test]
fn test_saved_file_uses_catalog_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let _store = open_store(dir.path()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for key in ["season", "whatsapp", "wsText", "wsColor", "logo", "title", "subtitle", "winter", "summer"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    let product = &value["winter"][0]["products"][0];
    for key in ["id", "name", "description", "basePrice", "hasDiscount", "discountValue", "thumb"] {
        assert!(product.get(key).is_some(), "missing product {key}");
    }
    assert_eq!(product["discountValue"], 15);
    assert_eq!(product["hasDiscount"], true);
}

#[test]
fn test_negative_stored_price_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = serde_json::to_value(CatalogDocument::default()).unwrap();
    doc["winter"][1]["products"][0]["basePrice"] = serde_json::json!(-10);
    std::fs::write(
        dir.path().join(format!("{KEY}.json")),
        serde_json::to_string(&doc).unwrap(),
    )
    .unwrap();

    let store = open_store(dir.path()).unwrap();
    let product = store
        .find_product(&CategoryId::new("w2"), &ProductId::new("p3"))
        .unwrap();
    assert_eq!(product.base_price, Price::ZERO);
    assert_eq!(product.final_price(), Price::ZERO);
    assert_eq!(product.name, "Cobija Polar XL");
}
