use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::{
    PageContext,
    builder::{Align, SectionBuilder},
};
use crate::ui::{icons::Icon, theme::theme_helpers as th};

const BADGE: &str = "BS Digital Marketing at UCP";
const SUBHEADLINE: &str = "Helping B2B SaaS & E-commerce brands grow through strategic content systems \
    and AI-powered automation workflows.";
const TRUSTED_BY: &str = "TRUSTED BY VISIONARY TEAMS";
const LOGOS: [&str; 4] = ["TECHFLOW", "AURORA", "NEXUS", "QUANTUM"];

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let mut section = SectionBuilder::new(ctx.frame());
    // Clear the navigation bar that overlays the top rows.
    section.blank(5);

    let dot = if ctx.pulse { "●" } else { "○" };
    section.row(
        vec![
            Span::styled(" ", th::chip_style(theme)),
            Span::styled(dot, th::chip_style(theme).fg(theme.roles().accent_primary)),
            Span::styled(format!(" {BADGE} "), th::chip_style(theme)),
        ],
        Align::Center,
    );
    section.blank(1);

    let headline = theme.heading_style();
    section.row(vec![Span::styled("Driving ROI with", headline)], Align::Center);
    section.row(vec![Span::styled("AI Automation", theme.accent_emphasis_style())], Align::Center);
    section.row(vec![Span::styled("& Storytelling", headline)], Align::Center);
    section.blank(1);

    section.paragraph(SUBHEADLINE, theme.text_secondary_style(), 72, Align::Center);
    section.blank(1);

    section.buttons(
        vec![
            (
                Span::styled(format!(" Explore My Work {} ", Icon::ArrowRight.glyph()), th::button_primary_style(theme, false)),
                Some("#portfolio".to_string()),
            ),
            (
                Span::styled(" My Expertise ", th::button_ghost_style(theme)),
                Some("#expertise".to_string()),
            ),
        ],
        3,
        Align::Center,
    );
    section.blank(3);

    section.divider(Style::default().fg(theme.roles().divider));
    section.blank(1);
    section.row(vec![Span::styled(TRUSTED_BY, theme.text_muted_style())], Align::Center);
    section.blank(1);
    let logo_style = Style::default()
        .fg(theme.roles().accent_subtle)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC);
    section.paragraph(&LOGOS.join("     "), logo_style, usize::MAX, Align::Center);
    section.blank(3);
    section
}
