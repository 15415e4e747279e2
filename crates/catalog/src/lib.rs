//! Content catalog source for Folio.
//!
//! The catalog holds the four ordered content lists rendered by the page:
//! navigation items, skills, portfolio entries and testimonials. This crate
//! provides the embedded default catalog, file loading (JSON or YAML), load
//! time validation and an optional file watcher that publishes reloads.

mod error;
mod loader;
mod validation;
mod watcher;

pub use error::{CatalogError, CatalogList};
pub use folio_types::ContentCatalog;
pub use loader::{CATALOG_PATH_ENV, CatalogFormat, embedded, from_str, load_from_path, resolve_path};
pub use validation::validate;
pub use watcher::CatalogWatcher;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use folio_types::Keyed;

    use super::*;

    /// The embedded catalog must load, validate and carry every section's
    /// content so the page never renders empty by default.
    #[test]
    fn embedded_catalog_is_complete_and_unique() {
        let catalog = embedded().expect("load embedded catalog");
        assert!(!catalog.nav_items.is_empty());
        assert!(!catalog.skills.is_empty());
        assert!(!catalog.portfolio.is_empty());
        assert!(!catalog.testimonials.is_empty());

        let ids: HashSet<&str> = catalog.portfolio.iter().map(Keyed::key).collect();
        assert_eq!(ids.len(), catalog.portfolio.len());
    }
}
