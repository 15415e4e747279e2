//! Load-time checks on catalog contents.
//!
//! Rendering relies on labels, names and ids as reconciliation keys, so a list
//! with duplicate keys is rejected here instead of being rendered ambiguously.

use std::collections::HashSet;

use folio_types::{ContentCatalog, Keyed};
use url::Url;

use crate::{CatalogError, CatalogList};

/// Validates key uniqueness, anchors and image URLs across the catalog.
pub fn validate(catalog: &ContentCatalog) -> Result<(), CatalogError> {
    ensure_unique_keys(CatalogList::NavItems, &catalog.nav_items)?;
    ensure_unique_keys(CatalogList::Skills, &catalog.skills)?;
    ensure_unique_keys(CatalogList::Portfolio, &catalog.portfolio)?;
    ensure_unique_keys(CatalogList::Testimonials, &catalog.testimonials)?;

    for item in &catalog.nav_items {
        if !is_in_page_anchor(&item.href) {
            return Err(CatalogError::InvalidAnchor {
                label: item.label.clone(),
                href: item.href.clone(),
            });
        }
    }

    let images = catalog
        .portfolio
        .iter()
        .map(|entry| (entry.id.as_str(), entry.image.as_str()))
        .chain(catalog.testimonials.iter().map(|t| (t.name.as_str(), t.image.as_str())));
    for (owner, image) in images {
        if !is_http_url(image) {
            return Err(CatalogError::InvalidImageUrl {
                owner: owner.to_string(),
                url: image.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_unique_keys<R: Keyed>(list: CatalogList, records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.key()) {
            return Err(CatalogError::DuplicateKey {
                list,
                key: record.key().to_string(),
            });
        }
    }
    Ok(())
}

/// `#` (page top) or `#fragment` with no whitespace.
fn is_in_page_anchor(href: &str) -> bool {
    match href.strip_prefix('#') {
        Some(fragment) => !fragment.chars().any(char::is_whitespace) && !fragment.contains('#'),
        None => false,
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

#[cfg(test)]
mod tests {
    use folio_types::{NavItem, Skill};

    use super::*;

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            description: "d".into(),
            icon: Default::default(),
        }
    }

    #[test]
    fn rejects_duplicate_skill_names() {
        let catalog = ContentCatalog {
            skills: vec![skill("SEO"), skill("Ads"), skill("SEO")],
            ..Default::default()
        };
        let error = validate(&catalog).expect_err("duplicate should fail");
        assert!(matches!(
            error,
            CatalogError::DuplicateKey { list: CatalogList::Skills, ref key } if key == "SEO"
        ));
    }

    #[test]
    fn anchors_must_point_into_the_page() {
        assert!(is_in_page_anchor("#"));
        assert!(is_in_page_anchor("#portfolio"));
        assert!(!is_in_page_anchor("/about"));
        assert!(!is_in_page_anchor("#two words"));

        let catalog = ContentCatalog {
            nav_items: vec![NavItem::new("Blog", "https://example.com/blog")],
            ..Default::default()
        };
        assert!(matches!(validate(&catalog), Err(CatalogError::InvalidAnchor { .. })));
    }

    #[test]
    fn images_must_be_absolute_http_urls() {
        assert!(is_http_url("https://picsum.photos/seed/book/400/500"));
        assert!(!is_http_url("images/cover.png"));
        assert!(!is_http_url("ftp://example.com/cover.png"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(validate(&ContentCatalog::default()).is_ok());
    }
}
