use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use dealergen_core::{Catalog, CatalogEntry};

use crate::errors::GenerationError;

/// GT Sport catalog shipped with the crate.
const GT_SPORT_JSON: &str = include_str!("../assets/gt_sport.json");

/// Parse a JSON array of catalog entries.
pub fn parse_catalog(json: &str) -> Result<Catalog, GenerationError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)
        .map_err(|err| GenerationError::Catalog(format!("invalid catalog json: {err}")))?;
    let catalog = Catalog::new(entries);
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog from a JSON file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, GenerationError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        GenerationError::Catalog(format!("failed to read catalog {}: {}", path.display(), err))
    })?;
    parse_catalog(&contents)
}

/// The embedded catalog, parsed once per process and shared read-only.
pub fn default_catalog() -> Result<Arc<Catalog>, GenerationError> {
    static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();
    if let Some(catalog) = CATALOG.get() {
        return Ok(Arc::clone(catalog));
    }
    let parsed = Arc::new(parse_catalog(GT_SPORT_JSON)?);
    Ok(Arc::clone(CATALOG.get_or_init(|| parsed)))
}
