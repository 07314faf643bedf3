//! Read-only catalog commands plus season switching and export.

use std::io::Write;
use std::path::Path;

use catalogo_core::{CategoryId, ProductId, Season};
use catalogo_editor::{CatalogStore, EditorConfig, KeyValueStorage, inquiry_link, write_backup};
use tracing::info;

use super::CommandResult;
use crate::render::render_catalog;

/// Render the active season, narrowed by `query` when given.
///
/// The query is matched as typed; only an empty query shows everything.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn show<S: KeyValueStorage>(
    store: &CatalogStore<S>,
    query: Option<&str>,
    out: &mut impl Write,
) -> CommandResult {
    let categories = store.search(query.unwrap_or_default());
    write!(out, "{}", render_catalog(store.document(), &categories))?;
    Ok(())
}

/// Switch the season on display.
///
/// # Errors
///
/// Returns an error if the catalog cannot be saved.
pub fn season<S: KeyValueStorage>(store: &mut CatalogStore<S>, season: Season) -> CommandResult {
    store.switch_season(season)?;
    info!(%season, "Season switched");
    Ok(())
}

/// Write `catalogo_backup.json` into `dir` and print its path.
///
/// # Errors
///
/// Returns an error if the backup cannot be written.
pub fn export<S: KeyValueStorage>(
    store: &CatalogStore<S>,
    dir: &Path,
    out: &mut impl Write,
) -> CommandResult {
    let path = write_backup(store.document(), dir)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Print the inquiry link for a product of the active season.
///
/// # Errors
///
/// Returns an error if the product does not exist or the output cannot be
/// written.
pub fn link<S: KeyValueStorage>(
    store: &CatalogStore<S>,
    config: &EditorConfig,
    category_id: &CategoryId,
    product_id: &ProductId,
    out: &mut impl Write,
) -> CommandResult {
    let product = store
        .find_product(category_id, product_id)
        .ok_or_else(|| format!("Product {category_id}/{product_id} not found in the active season"))?;
    let url = inquiry_link(
        &config.chat_base_url,
        &store.document().contact_number,
        product,
    );
    writeln!(out, "{url}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalogo_editor::MemoryStorage;

    use super::*;

    fn store() -> CatalogStore<MemoryStorage> {
        CatalogStore::open(MemoryStorage::new(), "catalog").unwrap()
    }

    #[test]
    fn test_show_with_query() {
        let store = store();
        let mut out = Vec::new();
        show(&store, Some("polar"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cobija Polar XL"));
        assert!(!text.contains("EDREDONES"));
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let store = store();
        let mut out = Vec::new();
        show(&store, Some("   "), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No products found."));

        let mut out = Vec::new();
        show(&store, Some(""), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("EDREDONES"));
    }

    #[test]
    fn test_season_switch() {
        let mut store = store();
        season(&mut store, Season::Summer).unwrap();
        assert_eq!(store.document().season, Season::Summer);
    }

    #[test]
    fn test_export_prints_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        export(&store(), dir.path(), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.trim_end().ends_with("catalogo_backup.json"));
        assert!(dir.path().join("catalogo_backup.json").exists());
    }

    #[test]
    fn test_link_for_known_and_unknown_product() {
        let store = store();
        let config = EditorConfig::default();
        let mut out = Vec::new();

        link(&store, &config, &"w1".into(), &"p1".into(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("https://wa.me/51999888777?text="));

        let mut out = Vec::new();
        assert!(link(&store, &config, &"w1".into(), &"p9".into(), &mut out).is_err());
    }
}
