use crate::content::ContentCatalog;

/// Messages that can be sent to update the application state.
///
/// Messages describe things that already happened (a tick elapsed, the
/// terminal changed size, the catalog was reloaded). Components react to them
/// and may return [`Effect`]s for the runtime to carry out.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick (pulse animation)
    Tick,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
    /// A watched catalog file was reloaded and validated
    CatalogReloaded(Box<ContentCatalog>),
}

/// Side effects requested by components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the page to an in-page anchor (e.g., "#portfolio", "#" for top)
    Navigate(String),
    /// Leave the application
    Quit,
}
