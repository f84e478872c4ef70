//! Reference data loading.

use quiz_core::{Catalog, RS_MUNICIPALITY_COUNT};
use std::path::Path;

/// Municipalities shipped with the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../data/municipios_rs.json");

/// Load the catalog from `path`, or the bundled list when no path is given.
///
/// An unreadable or invalid source yields an empty catalog: the game still
/// runs, every guess just misses.
pub fn load_catalog(path: Option<&Path>) -> Catalog {
    let content = match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read municipality list");
                return Catalog::empty();
            }
        },
        None => BUNDLED_CATALOG.to_string(),
    };

    match Catalog::from_json(&content) {
        Ok(catalog) => {
            tracing::info!(count = catalog.len(), "municipality list loaded");
            catalog
        }
        Err(err) => {
            tracing::warn!(%err, "invalid municipality list");
            Catalog::empty()
        }
    }
}

/// Number of finds that wins the game.
///
/// The bundled list wins at the full municipality count. A custom list wins
/// at its own size. An explicit total never exceeds what the catalog can
/// supply, so the found set cannot outgrow it.
pub fn win_target(explicit: Option<usize>, catalog: &Catalog, custom_list: bool) -> usize {
    let target = match explicit {
        Some(total) => total,
        None if custom_list && !catalog.is_empty() => catalog.len(),
        None => RS_MUNICIPALITY_COUNT,
    };

    if catalog.is_empty() {
        target
    } else {
        target.min(catalog.len())
    }
}
