use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Names one of the four content lists, used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogList {
    NavItems,
    Skills,
    Portfolio,
    Testimonials,
}

impl fmt::Display for CatalogList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NavItems => "navItems",
            Self::Skills => "skills",
            Self::Portfolio => "portfolio",
            Self::Testimonials => "testimonials",
        };
        f.write_str(name)
    }
}

/// Error surfaced when reading, parsing, validating or watching a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("catalog I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON payload failed to deserialize.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML payload failed to deserialize.
    #[error("catalog YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Two records in the same list share a reconciliation key.
    #[error("duplicate key '{key}' in {list}")]
    DuplicateKey { list: CatalogList, key: String },
    /// A navigation href is not an in-page anchor.
    #[error("nav item '{label}' has invalid anchor '{href}'")]
    InvalidAnchor { label: String, href: String },
    /// An image reference is not an absolute http(s) URL.
    #[error("image for '{owner}' is not an absolute http(s) URL: {url}")]
    InvalidImageUrl { owner: String, url: String },
    /// The file watcher could not be started.
    #[error("failed to watch catalog {}: {source}", .path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}
