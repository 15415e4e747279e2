use folio_types::Skill;
use folio_util::wrap_to_width;
use ratatui::text::{Line, Span};

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

fn skill_card(theme: &dyn Theme, skill: &Skill, interior: usize) -> Vec<Line<'static>> {
    let mut body = vec![
        Line::from(Span::styled(
            Icon::from(skill.icon).glyph(),
            theme.accent_emphasis_style().bg(theme.roles().surface),
        )),
        Line::default(),
        Line::from(Span::styled(skill.name.clone(), theme.heading_style())),
        Line::default(),
    ];
    body.extend(
        wrap_to_width(&skill.description, interior, None)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, theme.text_muted_style()))),
    );
    body
}

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let mut section = SectionBuilder::new(ctx.frame());
    section.row(vec![Span::styled("Core Expertise", theme.heading_style())], Align::Left);
    section.paragraph(
        "Bridging the gap between manual marketing and autonomous growth engines.",
        theme.text_muted_style(),
        usize::MAX,
        Align::Left,
    );
    section.buttons(
        vec![(
            Span::styled(format!("View all programs {}", Icon::ArrowRight.glyph()), th::link_style(theme, true)),
            Some("#resources".to_string()),
        )],
        0,
        Align::Left,
    );
    section.blank(1);

    let columns = grid_columns(ctx.width, 4, 2);
    let width = card_width(section.frame().inner, columns);
    let interior = width.saturating_sub(4);
    let cards = into_nodes(project(&ctx.catalog.skills, |skill| skill_card(theme, skill, interior)));
    section.extend(card_grid(theme, cards, columns, width, section.frame().left));
    section.blank(2);
    section
}
