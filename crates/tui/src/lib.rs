//! # Folio TUI Library
//!
//! A single-page portfolio rendered in the terminal with Ratatui. The page
//! is one tall scrolling document (hero, expertise, portfolio, resources,
//! testimonials and footer) under a navigation bar whose chrome elevates once
//! the page scrolls past a small threshold. Narrow terminals get a compact
//! bar with a toggleable menu.
//!
//! ## Architecture
//!
//! - `app`: application state and message handling
//! - `ui::page`: composition of the catalog into styled rows
//! - `ui::scroll`: viewport, scroll notifications and the elevation observer
//! - `ui::components`: navigation bar and floating chat button
//! - `ui::runtime`: terminal lifecycle and the event loop

mod app;
mod ui;

use anyhow::Result;
use folio_types::ContentCatalog;

pub use ui::runtime::RunOptions;
pub use ui::theme::{THEME_ENV, ThemeDefinition, catalog::all as themes};

use crate::ui::page::{self, PageContext};
use crate::ui::theme::{LimeTheme, Theme};

/// Runs the interactive page until the user quits.
///
/// # Errors
///
/// Terminal setup or teardown failures.
pub async fn run(options: RunOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}

/// Renders the whole page as plain text at `width` columns.
///
/// Used for non-interactive output; the navigation bar and floating button
/// are omitted.
pub fn render_plain(catalog: &ContentCatalog, width: u16, year: i32) -> String {
    let theme = LimeTheme::new();
    let ctx = PageContext {
        catalog,
        theme: &theme as &dyn Theme,
        width: width.max(20),
        pulse: true,
        year,
    };
    page::compose(&ctx).plain_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_lists_sections_in_order() {
        let catalog = folio_catalog::embedded().expect("embedded catalog");
        let text = render_plain(&catalog, 100, 2026);
        let headings = ["Driving ROI with", "Core Expertise", "Recent Projects", "Free AI Automation Toolkit", "Partners", "Say Hello"];
        let positions: Vec<usize> = headings.iter().map(|h| text.find(h).expect(h)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.contains("© 2026 Saim Ahmad. All rights reserved."));
        assert!(text.lines().all(|line| line.chars().count() <= 100));
    }

    #[test]
    fn theme_listing_is_not_empty() {
        assert!(themes().iter().any(|definition| definition.id == "lime"));
    }
}
