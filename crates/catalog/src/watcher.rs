//! File watcher that republishes the catalog whenever its file changes.
//!
//! The parent directory is watched rather than the file itself so editors
//! that save by writing a temp file and renaming it are still observed.

use std::path::{Path, PathBuf};

use folio_types::ContentCatalog;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::{CatalogError, load_from_path};

/// Keeps a catalog file under watch for as long as the value is alive.
///
/// Each change that yields a valid catalog different from the last one sent
/// is published on the channel. Invalid edits are logged and skipped, so the
/// previously published catalog stays in effect.
pub struct CatalogWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl std::fmt::Debug for CatalogWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWatcher").field("path", &self.path).finish()
    }
}

impl CatalogWatcher {
    /// Starts watching `path`, seeding change detection with `current`.
    pub fn spawn(path: &Path, current: ContentCatalog, sender: UnboundedSender<ContentCatalog>) -> Result<Self, CatalogError> {
        let path = path.canonicalize().map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

        let target = path.clone();
        let mut last_published = current;
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let event = match res {
                    Ok(event) => event,
                    Err(error) => {
                        warn!(error = %error, "Catalog watcher reported an error");
                        return;
                    }
                };
                if !(event.kind.is_modify() || event.kind.is_create()) || !touches(&event, &target) {
                    return;
                }
                match load_from_path(&target) {
                    Ok(catalog) if catalog == last_published => {
                        debug!(path = %target.display(), "Catalog change produced identical content");
                    }
                    Ok(catalog) => {
                        last_published = catalog.clone();
                        if sender.send(catalog).is_err() {
                            debug!("Catalog receiver dropped; ignoring reload");
                        }
                    }
                    Err(error) => {
                        warn!(path = %target.display(), error = %error, "Ignoring invalid catalog edit");
                    }
                }
            },
            Config::default(),
        )
        .map_err(|source| CatalogError::Watch {
            path: path.clone(),
            source,
        })?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|source| CatalogError::Watch {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, _watcher: watcher })
    }

    /// Canonical path of the watched catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn touches(event: &Event, target: &Path) -> bool {
    event
        .paths
        .iter()
        .any(|changed| changed == target || changed.file_name() == target.file_name())
}
