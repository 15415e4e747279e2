use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NAV_BAR_HEIGHT, NavBarState, NavTarget};
use crate::{
    app::App,
    ui::{
        components::Component,
        icons::Icon,
        page::layout::ContentFrame,
        theme::{Theme, theme_helpers as th},
    },
};

const BRAND: (&str, &str) = ("SAIM", "AHMAD");
const DESKTOP_CTA: &str = " Let's Chat ";
const MOBILE_CTA: &str = " Contact Me ";
const LINK_GAP: u16 = 3;

/// The top navigation bar.
///
/// Draws over the first rows of the page: transparent at the top, elevated
/// onto the surface color with a bottom rule once the page scrolls past the
/// threshold. Wide terminals show inline links and a call to action; compact
/// terminals show a menu toggle and an overlay panel when open.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn activate(app: &mut App, target: NavTarget) -> Vec<Effect> {
        if let Some(flag) = app.nav_bar.focus_flag(target) {
            app.focus.focus(flag);
        }
        app.nav_bar.activate(target)
    }

    fn render_brand(frame: &mut Frame, row: Rect, theme: &dyn Theme, elevated: bool) {
        let brand = Line::from(vec![
            Span::styled(format!("{} ", Icon::Bot.glyph()), theme.accent_emphasis_style()),
            Span::styled(BRAND.0, theme.heading_style()),
            Span::styled(".", theme.accent_emphasis_style()),
            Span::styled(BRAND.1, theme.heading_style()),
        ]);
        frame.render_widget(Paragraph::new(brand).style(th::chrome_style(theme, elevated)), row);
    }

    fn render_wide(frame: &mut Frame, row: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.nav_bar;
        let cta_width = DESKTOP_CTA.width() as u16;
        let labels: Vec<u16> = state.items().iter().map(|item| item.label.width() as u16).collect();
        let links_width: u16 = labels.iter().sum::<u16>() + LINK_GAP * labels.len() as u16;

        let right = row.x + row.width;
        let mut x = right.saturating_sub(links_width + cta_width).max(row.x);
        let mut item_areas = Vec::with_capacity(labels.len());
        for (index, (item, width)) in state.items().iter().zip(labels.iter().copied()).enumerate() {
            let focused = state.item_focus_flags.get(index).is_some_and(|flag| flag.get());
            let area = Rect::new(x, row.y, width.min(right.saturating_sub(x)), 1);
            frame.render_widget(Span::styled(item.label.as_str(), th::link_style(theme, focused)), area);
            item_areas.push(area);
            x = x.saturating_add(width + LINK_GAP);
        }

        let contact_area = Rect::new(x.min(right), row.y, cta_width.min(right.saturating_sub(x)), 1);
        let focused = state.contact_focus.get();
        frame.render_widget(Span::styled(DESKTOP_CTA, th::button_primary_style(theme, focused)), contact_area);

        let state = &mut app.nav_bar;
        state.item_areas = item_areas;
        state.contact_area = contact_area;
        state.toggle_area = Rect::default();
        state.overlay_area = Rect::default();
    }

    fn render_compact(frame: &mut Frame, row: Rect, page: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.nav_bar;
        let open = state.is_menu_open();
        let glyph = if open { Icon::Close.glyph() } else { Icon::Menu.glyph() };
        let toggle_area = Rect::new((row.x + row.width).saturating_sub(3), row.y, 3.min(row.width), 1);
        let toggle_style = if state.toggle_focus.get() {
            theme.accent_emphasis_style()
        } else {
            theme.text_primary_style()
        };
        frame.render_widget(Span::styled(format!(" {glyph} "), toggle_style), toggle_area);

        let mut item_areas = Vec::new();
        let mut contact_area = Rect::default();
        let mut overlay_area = Rect::default();
        if open {
            let wanted = state.items().len() as u16 + 4;
            let top = page.y + NAV_BAR_HEIGHT;
            overlay_area = Rect::new(page.x, top, page.width, wanted.min(page.height.saturating_sub(NAV_BAR_HEIGHT)));
            let any_focused = state.focused_target().is_some();
            let block = th::block(theme, None, any_focused);
            let inner = block.inner(overlay_area);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(block, overlay_area);

            let left = inner.x + 1;
            let width = inner.width.saturating_sub(2);
            for (index, item) in state.items().iter().enumerate() {
                let y = inner.y + index as u16;
                if y >= inner.y + inner.height {
                    break;
                }
                let focused = state.item_focus_flags.get(index).is_some_and(|flag| flag.get());
                let area = Rect::new(left, y, width, 1);
                frame.render_widget(Span::styled(item.label.as_str(), th::link_style(theme, focused)), area);
                item_areas.push(area);
            }
            let cta_y = inner.y + state.items().len() as u16 + 1;
            if cta_y < inner.y + inner.height {
                contact_area = Rect::new(left, cta_y, (MOBILE_CTA.width() as u16).min(width), 1);
                let focused = state.contact_focus.get();
                frame.render_widget(Span::styled(MOBILE_CTA, th::button_primary_style(theme, focused)), contact_area);
            }
        }

        let state = &mut app.nav_bar;
        state.toggle_area = toggle_area;
        state.item_areas = item_areas;
        state.contact_area = contact_area;
        state.overlay_area = overlay_area;
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if index < app.nav_bar.items().len() {
                    return Self::activate(app, NavTarget::Item(index));
                }
            }
            KeyCode::Char('m') if app.nav_bar.is_compact() => {
                return Self::activate(app, NavTarget::Toggle);
            }
            KeyCode::Esc => app.nav_bar.close_menu(),
            KeyCode::Left | KeyCode::Right => {
                if let Some(flag) = app.nav_bar.cycle_focus(key.code == KeyCode::Right).and_then(|t| app.nav_bar.focus_flag(t)) {
                    app.focus.focus(flag);
                }
            }
            KeyCode::Enter => {
                if let Some(target) = app.nav_bar.focused_target() {
                    return app.nav_bar.activate(target);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if let Some(target) = app.nav_bar.target_at(mouse.column, mouse.row) {
            return Self::activate(app, target);
        }
        if !app.nav_bar.contains(mouse.column, mouse.row) {
            // Clicking the page behind the open menu dismisses it.
            app.nav_bar.close_menu();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let elevated = app.nav_bar.is_elevated();
        let bar = Rect { height: NAV_BAR_HEIGHT.min(area.height), ..area };
        let chrome = th::chrome_style(theme, elevated);
        let mut block = Block::default().style(chrome);
        if elevated {
            block = block.borders(Borders::BOTTOM).border_style(theme.border_style(false).bg(theme.roles().surface));
        }
        frame.render_widget(block, bar);
        app.nav_bar.last_area = bar;
        if bar.height < 2 {
            return;
        }

        let content = ContentFrame::for_width(area.width);
        let row = Rect::new(area.x + content.left, bar.y + 1, content.inner, 1);
        Self::render_brand(frame, row, theme, elevated);
        if app.nav_bar.is_compact() {
            Self::render_compact(frame, row, area, app);
        } else {
            let brand_width = (BRAND.0.width() + BRAND.1.width()) as u16 + 4;
            let links_row = Rect {
                x: row.x + brand_width.min(row.width),
                width: row.width.saturating_sub(brand_width),
                ..row
            };
            Self::render_wide(frame, links_row, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        if app.nav_bar.is_compact() {
            let toggle = if app.nav_bar.is_menu_open() { " Close menu " } else { " Menu " };
            th::build_hint_spans(theme, &[(" m", toggle), ("Esc", " Close ")])
        } else {
            th::build_hint_spans(theme, &[(" 1-9", " Jump "), ("←/→", " Links ")])
        }
    }
}
