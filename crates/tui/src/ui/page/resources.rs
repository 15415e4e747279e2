use folio_util::wrap_to_width;
use ratatui::text::{Line, Span};

use super::{PageContext, builder::SectionBuilder, layout::boxed_card};
use crate::ui::{icons::Icon, theme::theme_helpers as th};

const PITCH: &str = "I've compiled my best n8n blueprints and storytelling frameworks to help you \
    scale your digital presence effortlessly.";
const CHECKLIST: [&str; 3] = ["3 n8n Lead Gen Workflows", "Brand Storytelling Template", "SaaS Growth Checklist"];
const COVER_IMAGE: &str = "https://picsum.photos/seed/book/400/500";

pub(super) fn render(ctx: &PageContext<'_>) -> SectionBuilder {
    let theme = ctx.theme;
    let mut section = SectionBuilder::new(ctx.frame());
    let frame = section.frame();
    let width = usize::from(frame.inner);
    let interior = width.saturating_sub(4);

    let mut body = vec![
        Line::from(Span::styled("Free AI Automation Toolkit", theme.heading_style())),
        Line::default(),
    ];
    body.extend(
        wrap_to_width(PITCH, interior, None)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, theme.text_secondary_style()))),
    );
    body.push(Line::default());
    for item in CHECKLIST {
        body.push(Line::from(vec![
            Span::styled(format!("{} ", Icon::CheckCircle.glyph()), theme.accent_primary_style()),
            Span::styled(item, theme.text_primary_style()),
        ]));
    }
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        format!(" Download Toolkit {} ", Icon::ArrowRight.glyph()),
        th::button_secondary_style(theme, false),
    )));
    body.push(Line::default());
    body.push(Line::from(Span::styled(
        format!("{} {COVER_IMAGE}", Icon::Play.glyph()),
        theme.text_muted_style(),
    )));

    let margin = Span::raw(" ".repeat(usize::from(frame.left)));
    let card: Vec<Line<'static>> = boxed_card(theme, body, width, 0)
        .into_iter()
        .map(|line| {
            let mut spans = vec![margin.clone()];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();
    section.extend(card);
    section.blank(3);
    section
}
