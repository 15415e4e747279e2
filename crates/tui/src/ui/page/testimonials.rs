use folio_types::Testimonial;
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

fn testimonial_card(theme: &dyn Theme, testimonial: &Testimonial, interior: usize) -> Vec<Line<'static>> {
    let mut body = vec![
        Line::from(vec![
            Span::styled("◉ ", theme.accent_primary_style()),
            Span::styled(testimonial.name.clone(), theme.heading_style()),
        ]),
        Line::from(Span::styled(
            format!("  {} @ {}", testimonial.role, testimonial.company),
            theme.text_muted_style(),
        )),
        Line::from(Span::styled(format!("  {}", testimonial.image), theme.text_muted_style())),
        Line::default(),
    ];
    let quote = format!("\u{201c}{}\u{201d}", testimonial.content);
    body.extend(
        wrap_to_width(&quote, interior, None)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, theme.text_secondary_style().add_modifier(Modifier::ITALIC)))),
    );
    body
}

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let mut section = SectionBuilder::new(ctx.frame());
    section.row(
        vec![
            Span::styled("What Our ", theme.heading_style()),
            Span::styled("Partners", theme.accent_emphasis_style()),
            Span::styled(" Say", theme.heading_style()),
        ],
        Align::Center,
    );
    section.paragraph(
        "Real people, real results. Scaling businesses through collaborative intelligence.",
        theme.text_muted_style(),
        usize::MAX,
        Align::Center,
    );
    section.blank(1);

    let columns = grid_columns(ctx.width, 3, 3);
    let width = card_width(section.frame().inner, columns);
    let interior = width.saturating_sub(4);
    let cards = into_nodes(project(&ctx.catalog.testimonials, |t| testimonial_card(theme, t, interior)));
    section.extend(card_grid(theme, cards, columns, width, section.frame().left));

    section.row(
        vec![Span::styled(
            format!(" View All Testimonials {} ", Icon::ArrowRight.glyph()),
            th::button_ghost_style(theme),
        )],
        Align::Center,
    );
    section.blank(3);
    section
}
