use folio_types::PortfolioEntry;
use folio_util::wrap_to_width;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::{
    PageContext,
    builder::{Align, SectionBuilder},
    layout::{card_grid, card_width, grid_columns},
};
use crate::ui::{
    icons::Icon,
    projection::{into_nodes, project},
    theme::{Theme, theme_helpers as th},
};

/// Description rows shown per card before clamping.
const DESCRIPTION_ROWS: usize = 2;

fn tag_chips(theme: &dyn Theme, tags: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ", th::panel_style(theme)));
        }
        spans.push(Span::styled(format!(" {} ", tag.to_uppercase()), th::chip_style(theme)));
    }
    Line::from(spans)
}

fn project_card(theme: &dyn Theme, entry: &PortfolioEntry, interior: usize) -> Vec<Line<'static>> {
    let mut body = vec![
        Line::from(Span::styled(
            format!(" {} ", entry.category.to_uppercase()),
            th::badge_style(theme),
        )),
        Line::default(),
    ];
    if !entry.tags.is_empty() {
        body.push(tag_chips(theme, &entry.tags));
        body.push(Line::default());
    }
    body.push(Line::from(Span::styled(entry.title.clone(), theme.heading_style())));
    body.extend(
        wrap_to_width(&entry.description, interior, Some(DESCRIPTION_ROWS))
            .into_iter()
            .map(|row| Line::from(Span::styled(row, theme.text_secondary_style()))),
    );
    body.push(Line::default());
    body.push(Line::from(Span::styled(format!("▣ {}", entry.image), theme.text_muted_style())));
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        format!("Case Study {}", Icon::ChevronRight.glyph()),
        theme.text_primary_style().add_modifier(Modifier::BOLD),
    )));
    body
}

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let mut section = SectionBuilder::new(ctx.frame());
    section.row(vec![Span::styled("Recent Projects", theme.heading_style())], Align::Center);
    section.paragraph(
        "Case studies that deliver tangible impact and measurable growth.",
        theme.text_muted_style(),
        usize::MAX,
        Align::Center,
    );
    section.blank(1);

    let columns = grid_columns(ctx.width, 3, 3);
    let width = card_width(section.frame().inner, columns);
    let interior = width.saturating_sub(4);
    let cards = into_nodes(project(&ctx.catalog.portfolio, |entry| project_card(theme, entry, interior)));
    section.extend(card_grid(theme, cards, columns, width, section.frame().left));
    section.blank(2);
    section
}
