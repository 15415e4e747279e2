use folio_types::{Effect, NavItem};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::menu::MenuState;
use crate::ui::{page::CONTACT_ANCHOR, page::layout::MEDIUM_BREAKPOINT, scroll::ScrollObserver, scroll::Viewport};

/// Terminal widths below this render the compact (mobile) bar.
pub const MOBILE_BREAKPOINT: u16 = MEDIUM_BREAKPOINT;
/// Rows taken by the navigation bar at the top of the page.
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Something in the navigation bar that can be focused or clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// The n-th navigation link.
    Item(usize),
    /// "Let's Chat" on wide terminals, "Contact Me" inside the compact menu.
    Contact,
    /// The compact menu toggle.
    Toggle,
}

/// State for the navigation bar.
///
/// Owns the link list, the scroll observer that drives the elevated chrome,
/// the compact menu state and rat-focus flags for every target. Hit areas are
/// written during render and read by mouse handling.
#[derive(Debug, Default)]
pub struct NavBarState {
    items: Vec<NavItem>,
    observer: Option<ScrollObserver>,
    menu: MenuState,
    compact: bool,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each link; kept in sync with `items`.
    pub item_focus_flags: Vec<FocusFlag>,
    pub contact_focus: FocusFlag,
    pub toggle_focus: FocusFlag,
    /// Last rendered bar area.
    pub last_area: Rect,
    /// Link areas from the last render, inline or inside the open menu.
    pub item_areas: Vec<Rect>,
    pub contact_area: Rect,
    pub toggle_area: Rect,
    /// Area of the open compact menu; empty when closed.
    pub overlay_area: Rect,
}

impl NavBarState {
    pub fn new(items: Vec<NavItem>) -> Self {
        let mut state = Self {
            container_focus: FocusFlag::named("nav"),
            contact_focus: FocusFlag::named("nav.contact"),
            toggle_focus: FocusFlag::named("nav.toggle"),
            ..Self::default()
        };
        state.set_items(items);
        state
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Replaces the link list, rebuilding the per-link focus flags.
    pub fn set_items(&mut self, items: Vec<NavItem>) {
        self.item_focus_flags = (0..items.len()).map(|i| FocusFlag::named(&format!("nav.item.{i}"))).collect();
        self.item_areas.clear();
        self.items = items;
    }

    /// Starts observing `viewport`. The menu always starts closed.
    pub fn mount(&mut self, viewport: &Viewport) {
        self.menu = MenuState::Closed;
        self.observer = Some(ScrollObserver::mount(viewport));
        debug!(offset = viewport.offset(), elevated = self.is_elevated(), "Navigation bar mounted");
    }

    /// Stops observing; later scroll notifications no longer reach the bar.
    pub fn unmount(&mut self) {
        if let Some(observer) = self.observer.take() {
            debug!(transitions = observer.transitions(), "Navigation bar unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.observer.is_some()
    }

    /// Whether the chrome is elevated; an unmounted bar never is.
    pub fn is_elevated(&self) -> bool {
        self.observer.as_ref().is_some_and(ScrollObserver::is_elevated)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        debug!(open = self.menu.is_open(), "Navigation menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Switches between compact and wide layout for a terminal `width`.
    ///
    /// Widening past the breakpoint closes the menu.
    pub fn set_width(&mut self, width: u16) {
        self.compact = width < MOBILE_BREAKPOINT;
        if !self.compact && self.menu.is_open() {
            debug!(width, "Closing navigation menu on wide layout");
            self.menu.close();
        }
    }

    /// Performs the action of `target`.
    ///
    /// Links and the contact button close the menu and navigate; the toggle
    /// flips the menu.
    pub fn activate(&mut self, target: NavTarget) -> Vec<Effect> {
        match target {
            NavTarget::Item(index) => {
                let Some(item) = self.items.get(index) else {
                    return Vec::new();
                };
                let href = item.href.clone();
                self.menu.close();
                vec![Effect::Navigate(href)]
            }
            NavTarget::Contact => {
                self.menu.close();
                vec![Effect::Navigate(CONTACT_ANCHOR.to_string())]
            }
            NavTarget::Toggle => {
                self.toggle_menu();
                Vec::new()
            }
        }
    }

    /// The focusable targets in the current layout, in focus order.
    pub fn visible_targets(&self) -> Vec<NavTarget> {
        let mut targets = Vec::with_capacity(self.items.len() + 2);
        if self.compact {
            targets.push(NavTarget::Toggle);
            if !self.menu.is_open() {
                return targets;
            }
        }
        targets.extend((0..self.items.len()).map(NavTarget::Item));
        targets.push(NavTarget::Contact);
        targets
    }

    pub fn focus_flag(&self, target: NavTarget) -> Option<&FocusFlag> {
        match target {
            NavTarget::Item(index) => self.item_focus_flags.get(index),
            NavTarget::Contact => Some(&self.contact_focus),
            NavTarget::Toggle => Some(&self.toggle_focus),
        }
    }

    pub fn focused_target(&self) -> Option<NavTarget> {
        self.visible_targets()
            .into_iter()
            .find(|target| self.focus_flag(*target).is_some_and(FocusFlag::get))
    }

    /// Next or previous visible target, wrapping around.
    pub fn cycle_focus(&self, forward: bool) -> Option<NavTarget> {
        let targets = self.visible_targets();
        if targets.is_empty() {
            return None;
        }
        let len = targets.len();
        let next = match self.focused_target().and_then(|current| targets.iter().position(|t| *t == current)) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        targets.get(next).copied()
    }

    /// Whether a screen position falls on the bar or the open menu.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let position = Position::new(x, y);
        self.last_area.contains(position) || self.overlay_area.contains(position)
    }

    /// The target under a screen position, using the last rendered areas.
    pub fn target_at(&self, x: u16, y: u16) -> Option<NavTarget> {
        let position = Position::new(x, y);
        if self.compact && self.toggle_area.contains(position) {
            return Some(NavTarget::Toggle);
        }
        if self.compact && !self.menu.is_open() {
            return None;
        }
        if let Some(index) = self.item_areas.iter().position(|area| area.contains(position)) {
            return Some(NavTarget::Item(index));
        }
        self.contact_area.contains(position).then_some(NavTarget::Contact)
    }
}

impl HasFocus for NavBarState {
    /// Builds a focus subtree of the targets visible in the current layout.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for target in self.visible_targets() {
            if let Some(flag) = self.focus_flag(target) {
                builder.leaf_widget(flag);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("Expertise", "#expertise"),
            NavItem::new("Work", "#portfolio"),
            NavItem::new("Resources", "#resources"),
            NavItem::new("Testimonials", "#testimonials"),
        ]
    }

    fn mounted(width: u16) -> (Viewport, NavBarState) {
        let mut viewport = Viewport::new();
        viewport.update_dimensions(400, 40);
        let mut state = NavBarState::new(items());
        state.set_width(width);
        state.mount(&viewport);
        (viewport, state)
    }

    #[test]
    fn mount_starts_closed_and_transparent() {
        let (_viewport, state) = mounted(80);
        assert!(state.is_mounted());
        assert!(!state.is_menu_open());
        assert!(!state.is_elevated());
    }

    #[test]
    fn elevation_follows_viewport_scroll() {
        let (mut viewport, state) = mounted(120);
        viewport.scroll_to(25);
        assert!(state.is_elevated());
        viewport.scroll_to(10);
        assert!(!state.is_elevated());
    }

    #[test]
    fn unmount_detaches_from_viewport() {
        let (mut viewport, mut state) = mounted(120);
        state.unmount();
        assert_eq!(viewport.listener_count(), 0);
        viewport.scroll_to(100);
        assert!(!state.is_elevated());
    }

    #[test]
    fn activating_a_link_navigates_and_closes_menu() {
        let (_viewport, mut state) = mounted(80);
        state.activate(NavTarget::Toggle);
        assert!(state.is_menu_open());

        let effects = state.activate(NavTarget::Item(1));
        assert_eq!(effects, vec![Effect::Navigate("#portfolio".into())]);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn activating_a_link_with_menu_closed_keeps_it_closed() {
        let (_viewport, mut state) = mounted(120);
        let effects = state.activate(NavTarget::Item(0));
        assert_eq!(effects, vec![Effect::Navigate("#expertise".into())]);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn contact_targets_the_footer() {
        let (_viewport, mut state) = mounted(80);
        state.toggle_menu();
        assert_eq!(state.activate(NavTarget::Contact), vec![Effect::Navigate("#contact".into())]);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn out_of_range_item_is_ignored() {
        let (_viewport, mut state) = mounted(120);
        assert!(state.activate(NavTarget::Item(9)).is_empty());
    }

    #[test]
    fn widening_closes_the_menu() {
        let (_viewport, mut state) = mounted(80);
        state.toggle_menu();
        state.set_width(90);
        assert!(state.is_menu_open());
        state.set_width(140);
        assert!(!state.is_compact());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn visible_targets_depend_on_layout_and_menu() {
        let (_viewport, mut state) = mounted(80);
        assert_eq!(state.visible_targets(), vec![NavTarget::Toggle]);
        state.toggle_menu();
        assert_eq!(state.visible_targets().len(), 1 + 4 + 1);

        state.set_width(120);
        assert_eq!(state.visible_targets().first(), Some(&NavTarget::Item(0)));
        assert_eq!(state.visible_targets().last(), Some(&NavTarget::Contact));
    }

    #[test]
    fn cycle_focus_wraps() {
        let (_viewport, state) = mounted(120);
        assert_eq!(state.cycle_focus(true), Some(NavTarget::Item(0)));
        state.contact_focus.set(true);
        assert_eq!(state.cycle_focus(true), Some(NavTarget::Item(0)));
        assert_eq!(state.cycle_focus(false), Some(NavTarget::Item(3)));
    }

    #[test]
    fn hit_testing_uses_rendered_areas() {
        let (_viewport, mut state) = mounted(80);
        state.last_area = Rect::new(0, 0, 80, 3);
        state.toggle_area = Rect::new(74, 1, 3, 1);
        state.item_areas = vec![Rect::new(2, 4, 20, 1)];
        state.contact_area = Rect::new(2, 6, 14, 1);

        assert_eq!(state.target_at(75, 1), Some(NavTarget::Toggle));
        assert_eq!(state.target_at(3, 4), None, "links are hidden while the menu is closed");
        state.toggle_menu();
        assert_eq!(state.target_at(3, 4), Some(NavTarget::Item(0)));
        assert_eq!(state.target_at(5, 6), Some(NavTarget::Contact));
        assert_eq!(state.target_at(50, 20), None);
    }
}
