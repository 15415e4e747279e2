use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::{
    components::{ChatButtonComponent, Component, NavBarComponent, common::render_vertical_scrollbar},
    page::CONTACT_ANCHOR,
    theme::theme_helpers as th,
};
use crate::app::App;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i16 = 3;

/// Root view: the scrolling page with the navigation bar, floating chat
/// button and scrollbar layered on top, plus the hints row.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    pub chat_view: ChatButtonComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_link_at(app: &App, column: u16, row: u16) -> Option<String> {
        let area = app.page_area;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let document_row = app.viewport.offset().saturating_add(row - area.y);
        app.page
            .link_at(document_row, column - area.x)
            .map(|link| link.anchor.clone())
    }

    fn render_page(frame: &mut Frame, area: Rect, app: &App) {
        let start = usize::from(app.viewport.offset()).min(app.page.lines().len());
        let end = (start + usize::from(area.height)).min(app.page.lines().len());
        let visible = app.page.lines()[start..end].to_vec();
        let page = Paragraph::new(visible).style(th::page_style(&*app.ctx.theme));
        frame.render_widget(page, area);
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::Quit],
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Up | KeyCode::Char('k') => app.viewport.scroll_lines(-1),
            KeyCode::Down | KeyCode::Char('j') => app.viewport.scroll_lines(1),
            KeyCode::PageUp => app.viewport.scroll_pages(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.viewport.scroll_pages(1),
            KeyCode::Home | KeyCode::Char('g') => app.viewport.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => app.viewport.scroll_to_bottom(),
            KeyCode::Char('c') => {
                app.nav_bar.close_menu();
                return vec![Effect::Navigate(CONTACT_ANCHOR.to_string())];
            }
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Enter if app.chat_focus.get() => return self.chat_view.handle_key_events(app, key),
            _ => return self.nav_bar_view.handle_key_events(app, key),
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.viewport.scroll_lines(-WHEEL_STEP),
            MouseEventKind::ScrollDown => app.viewport.scroll_lines(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let over_nav = app.nav_bar.contains(mouse.column, mouse.row);
                let effects = self.nav_bar_view.handle_mouse_events(app, mouse);
                if !effects.is_empty() || over_nav {
                    return effects;
                }
                let effects = self.chat_view.handle_mouse_events(app, mouse);
                if !effects.is_empty() {
                    return effects;
                }
                if let Some(anchor) = Self::page_link_at(app, mouse.column, mouse.row) {
                    return vec![Effect::Navigate(anchor)];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Block::default().style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        let (page_area, hints_area) = (layout[0], layout[1]);
        if page_area != app.page_area {
            // Terminals that miss resize events still get a correct layout.
            app.update(&Msg::Resize(area.width, area.height));
        }

        Self::render_page(frame, page_area, app);
        render_vertical_scrollbar(frame, page_area, &*app.ctx.theme, app.viewport.metrics());
        self.chat_view.render(frame, page_area, app);
        self.nav_bar_view.render(frame, page_area, app);

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(th::page_style(&*app.ctx.theme));
        frame.render_widget(hints, hints_area);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        let mut spans = vec![Span::styled("Hints: ", theme.text_muted_style())];
        spans.extend(th::build_hint_spans(
            theme,
            &[("↑/↓", " Scroll "), ("PgUp/PgDn", " Page "), ("Tab", " Focus "), ("c", " Contact ")],
        ));
        spans.extend(self.nav_bar_view.get_hint_spans(app));
        spans.extend(th::build_hint_spans(theme, &[(" q", " Quit ")]));
        spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}
