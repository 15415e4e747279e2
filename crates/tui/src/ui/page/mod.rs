//! Page composition: turns the content catalog into styled rows.
//!
//! The page is one tall document of [`Line`]s. [`compose`] builds it from
//! the six sections in order (hero, expertise, portfolio, resources,
//! testimonials, footer) and records the first row of every section in an
//! anchor table so navigation targets can be resolved to scroll offsets.
//! Clickable in-page buttons are recorded as [`PageLink`]s in document
//! coordinates.

mod builder;
mod expertise;
mod footer;
mod hero;
pub mod layout;
mod portfolio;
mod resources;
mod testimonials;

use folio_types::ContentCatalog;
use indexmap::IndexMap;
use ratatui::text::Line;

pub(crate) use builder::SectionBuilder;
use layout::ContentFrame;

use crate::ui::theme::Theme;

/// Anchor of the top of the page.
pub const TOP_ANCHOR: &str = "#";
/// Anchor of the footer contact block.
pub const CONTACT_ANCHOR: &str = "#contact";

/// Inputs shared by every section renderer.
pub struct PageContext<'a> {
    pub catalog: &'a ContentCatalog,
    pub theme: &'a dyn Theme,
    pub width: u16,
    /// Alternates on each pulse tick; drives the hero badge dot.
    pub pulse: bool,
    /// Year printed in the footer copyright.
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn frame(&self) -> ContentFrame {
        ContentFrame::for_width(self.width)
    }
}

/// A clickable region of the page in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub row: u16,
    /// First column of the region.
    pub start: u16,
    /// One past the last column of the region.
    pub end: u16,
    pub anchor: String,
}

impl PageLink {
    pub fn contains(&self, row: u16, column: u16) -> bool {
        self.row == row && (self.start..self.end).contains(&column)
    }
}

/// The fully composed page.
#[derive(Debug, Default, Clone)]
pub struct PageDocument {
    lines: Vec<Line<'static>>,
    anchors: IndexMap<String, u16>,
    links: Vec<PageLink>,
}

impl PageDocument {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Section anchors in page order, mapped to their first row.
    pub fn anchors(&self) -> &IndexMap<String, u16> {
        &self.anchors
    }

    /// Row of `anchor`; the bare `#` resolves to the top of the page.
    pub fn anchor_row(&self, anchor: &str) -> Option<u16> {
        if anchor == TOP_ANCHOR {
            return Some(0);
        }
        self.anchors.get(anchor).copied()
    }

    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    /// The link under a document position, if any.
    pub fn link_at(&self, row: u16, column: u16) -> Option<&PageLink> {
        self.links.iter().find(|link| link.contains(row, column))
    }

    /// The page as plain text with trailing whitespace trimmed from each row.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }

    fn append_section(&mut self, anchor: Option<&str>, section: SectionBuilder) {
        let base = self.height();
        if let Some(anchor) = anchor {
            self.anchors.insert(anchor.to_string(), base);
        }
        let (lines, links) = section.finish();
        self.links.extend(links.into_iter().map(|mut link| {
            link.row = link.row.saturating_add(base);
            link
        }));
        self.lines.extend(lines);
    }
}

/// Builds the whole page for the given context.
pub fn compose(ctx: &PageContext<'_>) -> PageDocument {
    let mut document = PageDocument::default();
    document.append_section(None, hero::render(ctx));
    document.append_section(Some("#expertise"), expertise::render(ctx));
    document.append_section(Some("#portfolio"), portfolio::render(ctx));
    document.append_section(Some("#resources"), resources::render(ctx));
    document.append_section(Some("#testimonials"), testimonials::render(ctx));
    document.append_section(Some(CONTACT_ANCHOR), footer::render(ctx));
    document
}
