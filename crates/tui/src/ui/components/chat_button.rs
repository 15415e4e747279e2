//! Floating "Let's have a chat!" button pinned to the bottom-right corner.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{components::Component, page::CONTACT_ANCHOR, theme::theme_helpers as th},
};

const LABEL: &str = " Let's have a chat! ";

#[derive(Debug, Default)]
pub struct ChatButtonComponent;

impl ChatButtonComponent {
    /// Area of the button inside `page`, one column in from the right edge.
    pub fn area_in(page: Rect) -> Rect {
        let width = (LABEL.width() as u16 + 2).min(page.width);
        if page.height < 2 {
            return Rect::default();
        }
        Rect::new(
            (page.x + page.width).saturating_sub(width + 1).max(page.x),
            page.y + page.height - 2,
            width,
            1,
        )
    }

    fn navigate(app: &mut App) -> Vec<Effect> {
        app.focus.focus(&app.chat_focus);
        app.nav_bar.close_menu();
        vec![Effect::Navigate(CONTACT_ANCHOR.to_string())]
    }
}

impl Component for ChatButtonComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Enter && app.chat_focus.get() {
            return Self::navigate(app);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && app.chat_area.contains(Position::new(mouse.column, mouse.row)) {
            return Self::navigate(app);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let area = Self::area_in(rect);
        app.chat_area = area;
        if area.is_empty() {
            return;
        }
        let theme = &*app.ctx.theme;
        let style = th::button_secondary_style(theme, app.chat_focus.get());
        let dot = if app.pulse { "●" } else { "○" };
        let line = Line::from(vec![
            Span::styled(" ", style),
            Span::styled(dot, style.fg(theme.roles().accent_primary)),
            Span::styled(LABEL, style),
        ]);
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
