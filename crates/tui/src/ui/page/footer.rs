use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::{
    PageContext, TOP_ANCHOR,
    builder::{Align, SectionBuilder},
};
use crate::ui::{
    icons::Icon,
    projection::{into_nodes, project},
    theme::theme_helpers as th,
};

const CONTACT_EMAIL: &str = "saimahmadpervaiz@gmail.com";
const PITCH: &str = "Let's build the future of your brand today. Available for internships and collaborations.";
const LOCATION: &str = "Lahore, Punjab, Pakistan";
const SOCIAL: [(Icon, &str); 3] = [
    (Icon::Linkedin, "https://linkedin.com"),
    (Icon::Mail, "mailto:saimahmadpervaiz@gmail.com"),
    (Icon::Github, "https://github.com"),
];

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let divider = Style::default().fg(theme.roles().divider);
    let mut section = SectionBuilder::new(ctx.frame());
    section.divider(divider);
    section.blank(1);

    section.buttons(
        vec![(
            Span::styled(
                format!("{} SAIM AHMAD", Icon::Bot.glyph()),
                theme.accent_emphasis_style(),
            ),
            Some(TOP_ANCHOR.to_string()),
        )],
        0,
        Align::Left,
    );
    section.paragraph(PITCH, theme.text_muted_style(), 60, Align::Left);
    section.blank(1);
    let mut social = Vec::with_capacity(SOCIAL.len() * 3);
    for (index, (icon, target)) in SOCIAL.iter().enumerate() {
        if index > 0 {
            social.push(Span::raw("   "));
        }
        social.push(Span::styled(format!("[{}]", icon.glyph()), theme.accent_primary_style()));
        social.push(Span::styled(format!(" {target}"), theme.text_muted_style()));
    }
    section.row(social, Align::Left);
    section.blank(1);

    section.row(vec![Span::styled("Navigation", theme.heading_style())], Align::Left);
    let links = into_nodes(project(&ctx.catalog.nav_items, |item| {
        (
            Span::styled(format!("{} {}", Icon::ChevronRight.glyph(), item.label), th::link_style(theme, false)),
            Some(item.href.clone()),
        )
    }));
    for link in links {
        section.buttons(vec![link], 0, Align::Left);
    }
    section.blank(1);

    section.row(vec![Span::styled("Say Hello", theme.heading_style())], Align::Left);
    section.row(vec![Span::styled(LOCATION, theme.text_muted_style())], Align::Left);
    section.row(
        vec![Span::styled(CONTACT_EMAIL, theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED))],
        Align::Left,
    );
    section.blank(1);

    section.divider(divider);
    section.row(
        vec![Span::styled(
            format!("© {} Saim Ahmad. All rights reserved.", ctx.year),
            theme.text_muted_style(),
        )],
        Align::Left,
    );
    section.buttons(
        vec![
            (Span::styled("Terms of Service", th::link_style(theme, false)), Some(TOP_ANCHOR.to_string())),
            (Span::styled("Privacy Policy", th::link_style(theme, false)), Some(TOP_ANCHOR.to_string())),
        ],
        4,
        Align::Left,
    );
    // Room for the floating chat button.
    section.blank(3);
    section
}
