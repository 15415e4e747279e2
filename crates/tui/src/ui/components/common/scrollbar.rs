//! Themed scrollbar rendering for the page viewport.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::ScrollMetrics;
use crate::ui::theme::roles::Theme;

/// Renders a themed vertical scrollbar on the right side of the given area.
///
/// Nothing is drawn while the content fits inside the viewport.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, theme: &dyn Theme, metrics: &ScrollMetrics) {
    if !metrics.is_scrollable() {
        return;
    }
    let mut scrollbar_state = ScrollbarState::new(usize::from(metrics.max_offset()) + 1)
        .position(usize::from(metrics.offset()))
        .viewport_content_length(usize::from(metrics.viewport_height()));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track));
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
