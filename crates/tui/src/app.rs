//! Application state and message handling.
//!
//! `App` owns the content catalog, the composed page, the page viewport and
//! the navigation bar state. It follows a message-driven style: the runtime
//! turns terminal and timer events into [`Msg`]s and the main view turns
//! input into [`Effect`]s that are applied here.

use chrono::Datelike;
use folio_types::{ContentCatalog, Effect, Msg};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::{
    components::nav_bar::{NAV_BAR_HEIGHT, NavBarState},
    page::{self, PageContext, PageDocument},
    scroll::Viewport,
    theme::{LoadedTheme, Theme},
};

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    /// Identifier of the active theme
    pub theme_id: &'static str,
}

impl SharedCtx {
    pub fn new(loaded: LoadedTheme) -> Self {
        Self {
            theme: loaded.theme,
            theme_id: loaded.definition.id,
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    pub catalog: ContentCatalog,
    /// Page composed for the current width and pulse phase
    pub page: PageDocument,
    pub viewport: Viewport,
    pub nav_bar: NavBarState,
    pub focus: Focus,
    /// Focus flag of the floating chat button
    pub chat_focus: FocusFlag,
    /// Floating chat button area from the last render
    pub chat_area: Rect,
    /// Page area from the last layout
    pub page_area: Rect,
    /// Alternates on every tick
    pub pulse: bool,
    container_focus: FocusFlag,
    width: u16,
    year: i32,
}

impl App {
    /// Builds the app for a terminal of `width` x `height` and mounts the navigation bar.
    pub fn new(theme: LoadedTheme, catalog: ContentCatalog, width: u16, height: u16) -> Self {
        let mut nav_bar = NavBarState::new(catalog.nav_items.clone());
        nav_bar.set_width(width);
        let mut app = Self {
            ctx: SharedCtx::new(theme),
            catalog,
            page: PageDocument::default(),
            viewport: Viewport::new(),
            nav_bar,
            focus: Focus::default(),
            chat_focus: FocusFlag::named("chat"),
            chat_area: Rect::default(),
            page_area: Rect::default(),
            pulse: false,
            container_focus: FocusFlag::named("app"),
            width,
            year: chrono::Local::now().year(),
        };
        app.set_page_area(page_area_for(width, height));
        app.nav_bar.mount(&app.viewport);
        app.focus = FocusBuilder::build_for(&app);
        app
    }

    /// Rebuilds the page for the current catalog, width and pulse phase.
    pub fn recompose(&mut self) {
        let ctx = PageContext {
            catalog: &self.catalog,
            theme: &*self.ctx.theme,
            width: self.width,
            pulse: self.pulse,
            year: self.year,
        };
        self.page = page::compose(&ctx);
        self.viewport.update_dimensions(self.page.height(), self.page_area.height);
    }

    fn set_page_area(&mut self, area: Rect) {
        self.page_area = area;
        self.width = area.width;
        self.recompose();
    }

    /// Scrolls so that `anchor` sits just below the navigation bar.
    ///
    /// Returns `false` and leaves the offset alone for unknown anchors.
    pub fn navigate(&mut self, anchor: &str) -> bool {
        match self.page.anchor_row(anchor) {
            Some(row) => {
                self.viewport.scroll_to(row.saturating_sub(NAV_BAR_HEIGHT));
                debug!(anchor, offset = self.viewport.offset(), "Navigated to anchor");
                true
            }
            None => {
                debug!(anchor, "Ignoring navigation to unknown anchor");
                false
            }
        }
    }

    /// Applies effects that change app state; returns whether to quit.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Navigate(anchor) => {
                    self.navigate(&anchor);
                }
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Updates application state for a message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.pulse = !self.pulse;
                self.recompose();
            }
            Msg::Resize(width, height) => {
                self.nav_bar.set_width(*width);
                self.set_page_area(page_area_for(*width, *height));
            }
            Msg::CatalogReloaded(catalog) => {
                debug!(
                    skills = catalog.skills.len(),
                    portfolio = catalog.portfolio.len(),
                    testimonials = catalog.testimonials.len(),
                    "Applying reloaded catalog"
                );
                self.nav_bar.set_items(catalog.nav_items.clone());
                self.catalog = catalog.as_ref().clone();
                self.recompose();
            }
        }
        Vec::new()
    }
}

/// The page fills the screen except for the hints row at the bottom.
fn page_area_for(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(1))
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav_bar);
        builder.leaf_widget(&self.chat_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{self, catalog as theme_catalog};

    fn app(width: u16, height: u16) -> App {
        let catalog = folio_catalog::embedded().expect("embedded catalog");
        let loaded = theme::LoadedTheme::from_definition(theme_catalog::default_truecolor());
        App::new(loaded, catalog, width, height)
    }

    #[test]
    fn starts_at_top_with_transparent_chrome() {
        let app = app(120, 40);
        assert_eq!(app.viewport.offset(), 0);
        assert!(app.nav_bar.is_mounted());
        assert!(!app.nav_bar.is_elevated());
        assert!(!app.nav_bar.is_menu_open());
        assert_eq!(app.viewport.metrics().viewport_height(), 39);
    }

    #[test]
    fn navigate_places_section_below_the_bar() {
        let mut app = app(120, 40);
        let row = app.page.anchor_row("#portfolio").expect("portfolio anchor");
        assert!(app.navigate("#portfolio"));
        assert_eq!(app.viewport.offset(), row - NAV_BAR_HEIGHT);
        assert!(app.nav_bar.is_elevated());

        assert!(app.navigate("#"));
        assert_eq!(app.viewport.offset(), 0);
        assert!(!app.nav_bar.is_elevated());
    }

    #[test]
    fn unknown_anchor_is_ignored() {
        let mut app = app(120, 40);
        app.viewport.scroll_to(12);
        assert!(!app.navigate("#missing"));
        assert_eq!(app.viewport.offset(), 12);
    }

    #[test]
    fn resize_to_wide_closes_menu() {
        let mut app = app(80, 40);
        app.nav_bar.toggle_menu();
        app.update(&Msg::Resize(90, 40));
        assert!(app.nav_bar.is_menu_open());
        app.update(&Msg::Resize(140, 40));
        assert!(!app.nav_bar.is_menu_open());
    }

    #[test]
    fn tick_flips_pulse() {
        let mut app = app(120, 40);
        let before = app.pulse;
        app.update(&Msg::Tick);
        assert_ne!(app.pulse, before);
    }

    #[test]
    fn catalog_reload_replaces_content_and_links() {
        let mut app = app(120, 40);
        let mut catalog = app.catalog.clone();
        catalog.nav_items.truncate(2);
        catalog.portfolio.reverse();
        let first_title = catalog.portfolio[0].title.clone();
        app.update(&Msg::CatalogReloaded(Box::new(catalog)));

        assert_eq!(app.nav_bar.items().len(), 2);
        assert_eq!(app.nav_bar.item_focus_flags.len(), 2);
        let text = app.page.plain_text();
        let first_position = text.find(&first_title).expect("reloaded title");
        for entry in &app.catalog.portfolio[1..] {
            assert!(text.find(&entry.title).expect("title") > first_position);
        }
    }

    #[test]
    fn quit_effect_is_reported() {
        let mut app = app(120, 40);
        assert!(!app.apply_effects(vec![Effect::Navigate("#resources".into())]));
        assert!(app.apply_effects(vec![Effect::Quit]));
    }
}
