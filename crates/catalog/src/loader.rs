use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use folio_types::ContentCatalog;
use folio_util::expand_tilde;
use tracing::debug;

use crate::{CatalogError, validate};

/// Environment variable naming the catalog file used when no path is passed.
pub const CATALOG_PATH_ENV: &str = "FOLIO_CATALOG";

const EMBEDDED_CATALOG: &str = include_str!("../catalog/portfolio.json");

/// Serialization formats accepted for catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Loads and validates the catalog compiled into the binary.
pub fn embedded() -> Result<ContentCatalog, CatalogError> {
    from_str(EMBEDDED_CATALOG, CatalogFormat::Json)
}

/// Parses and validates a catalog from an in-memory document.
pub fn from_str(source: &str, format: CatalogFormat) -> Result<ContentCatalog, CatalogError> {
    let catalog: ContentCatalog = match format {
        CatalogFormat::Json => serde_json::from_str(source)?,
        CatalogFormat::Yaml => serde_yaml::from_str(source)?,
    };
    validate(&catalog)?;
    Ok(catalog)
}

/// Reads, parses and validates a catalog file.
pub fn load_from_path(path: &Path) -> Result<ContentCatalog, CatalogError> {
    let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = CatalogFormat::from_path(path);
    let catalog = from_str(&source, format)?;
    debug!(
        path = %path.display(),
        nav_items = catalog.nav_items.len(),
        skills = catalog.skills.len(),
        portfolio = catalog.portfolio.len(),
        testimonials = catalog.testimonials.len(),
        "Loaded content catalog"
    );
    Ok(catalog)
}

/// Resolves the catalog path from an explicit argument or `FOLIO_CATALOG`.
///
/// Blank values are ignored and `~` is expanded. Returns `None` when the
/// embedded catalog should be used.
pub fn resolve_path(explicit: Option<&str>) -> Option<PathBuf> {
    let from_env = env::var(CATALOG_PATH_ENV).ok();
    explicit
        .or(from_env.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(expand_tilde)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("site.YML")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("site.yaml")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("site.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("site")), CatalogFormat::Json);
    }

    #[test]
    fn explicit_path_wins_and_blank_is_ignored() {
        assert_eq!(resolve_path(Some("content.json")), Some(PathBuf::from("content.json")));
        assert_eq!(resolve_path(Some("   ")), None);
    }
}
