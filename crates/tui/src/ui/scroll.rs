//! Page viewport, scroll notifications and the elevated-chrome observer.
//!
//! The [`Viewport`] owns the page scroll position and publishes every scroll
//! notification to its listeners. Listeners are held through
//! [`ScrollSubscription`] guards: dropping the guard removes the listener
//! synchronously, so a torn-down component can never be reached by a later
//! notification.
//!
//! [`ScrollObserver`] is the navigation bar's subscriber. It derives the
//! elevated-chrome flag as `offset > ELEVATION_THRESHOLD` on every
//! notification.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::ui::components::common::ScrollMetrics;

/// Rows the page must be scrolled past before the chrome elevates.
pub const ELEVATION_THRESHOLD: u16 = 20;

/// Whether the chrome is elevated at `offset`.
pub const fn is_elevated(offset: u16) -> bool {
    offset > ELEVATION_THRESHOLD
}

type Listener = Box<dyn FnMut(u16)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Scrollable page area plus the set of scroll listeners.
///
/// Every scroll operation counts as one notification and is published even if
/// the offset did not move (e.g., scrolling up while already at the top).
/// Dimension updates publish only when clamping moved the offset.
#[derive(Default)]
pub struct Viewport {
    metrics: ScrollMetrics,
    listeners: Rc<RefCell<ListenerTable>>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("metrics", &self.metrics)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.metrics.offset()
    }

    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Registers `listener` for scroll notifications until the returned guard drops.
    ///
    /// Listeners must not subscribe or unsubscribe from inside a notification.
    pub fn subscribe(&self, listener: impl FnMut(u16) + 'static) -> ScrollSubscription {
        let mut table = self.listeners.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Box::new(listener)));
        ScrollSubscription {
            id,
            table: Rc::downgrade(&self.listeners),
        }
    }

    pub fn scroll_lines(&mut self, delta: i16) {
        self.metrics.scroll_lines(delta);
        self.publish();
    }

    pub fn scroll_pages(&mut self, delta_pages: i16) {
        self.metrics.scroll_pages(delta_pages);
        self.publish();
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.metrics.scroll_to(offset);
        self.publish();
    }

    pub fn scroll_to_top(&mut self) {
        self.metrics.scroll_to_top();
        self.publish();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.metrics.scroll_to_bottom();
        self.publish();
    }

    /// Records the rendered page height and viewport height.
    pub fn update_dimensions(&mut self, content_height: u16, viewport_height: u16) {
        let before = self.metrics.offset();
        self.metrics.update_dimensions(content_height, viewport_height);
        if self.metrics.offset() != before {
            self.publish();
        }
    }

    fn publish(&self) {
        let offset = self.metrics.offset();
        let mut table = self.listeners.borrow_mut();
        for (_, listener) in table.entries.iter_mut() {
            listener(offset);
        }
    }
}

/// Guard for a registered scroll listener; dropping it unsubscribes.
#[must_use = "dropping the subscription immediately unsubscribes the listener"]
pub struct ScrollSubscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription").field("id", &self.id).finish()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Derives the elevated-chrome flag from scroll notifications.
///
/// Created on mount; dropping it (unmount) detaches the listener before the
/// flag cell is released.
pub struct ScrollObserver {
    // Field order matters: the subscription drops first.
    _subscription: ScrollSubscription,
    elevated: Rc<Cell<bool>>,
    transitions: Rc<Cell<u32>>,
}

impl std::fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("elevated", &self.elevated.get())
            .field("transitions", &self.transitions.get())
            .finish()
    }
}

impl ScrollObserver {
    /// Subscribes to `viewport`, seeding the flag from its current offset.
    pub fn mount(viewport: &Viewport) -> Self {
        let elevated = Rc::new(Cell::new(is_elevated(viewport.offset())));
        let transitions = Rc::new(Cell::new(0));
        let subscription = {
            let elevated = Rc::clone(&elevated);
            let transitions = Rc::clone(&transitions);
            viewport.subscribe(move |offset| {
                let next = is_elevated(offset);
                if elevated.get() != next {
                    elevated.set(next);
                    transitions.set(transitions.get() + 1);
                    debug!(offset, elevated = next, "Navigation chrome elevation changed");
                }
            })
        };
        Self {
            _subscription: subscription,
            elevated,
            transitions,
        }
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated.get()
    }

    /// Number of flag changes since mount.
    pub fn transitions(&self) -> u32 {
        self.transitions.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall_viewport() -> Viewport {
        let mut viewport = Viewport::new();
        viewport.update_dimensions(500, 40);
        viewport
    }

    #[test]
    fn flag_tracks_threshold_in_both_directions() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);

        let observed: Vec<bool> = [0, 15, 25, 10]
            .into_iter()
            .map(|offset| {
                viewport.scroll_to(offset);
                observer.is_elevated()
            })
            .collect();
        assert_eq!(observed, vec![false, false, true, false]);
    }

    #[test]
    fn threshold_is_strictly_greater_than_twenty() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);

        viewport.scroll_to(20);
        assert!(!observer.is_elevated());
        viewport.scroll_to(21);
        assert!(observer.is_elevated());
        for offset in 0..=120u16 {
            viewport.scroll_to(offset);
            assert_eq!(observer.is_elevated(), offset > 20, "offset {offset}");
        }
    }

    #[test]
    fn repeated_offsets_do_not_transition_again() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);

        viewport.scroll_to(30);
        viewport.scroll_to(30);
        assert!(observer.is_elevated());
        assert_eq!(observer.transitions(), 1);

        viewport.scroll_lines(1);
        assert_eq!(observer.transitions(), 1);
    }

    #[test]
    fn unmount_detaches_listener() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);
        assert_eq!(viewport.listener_count(), 1);

        drop(observer);
        assert_eq!(viewport.listener_count(), 0);
        viewport.scroll_to(100);
    }

    #[test]
    fn subscription_outliving_viewport_drops_cleanly() {
        let viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);
        drop(viewport);
        assert!(!observer.is_elevated());
        drop(observer);
    }

    #[test]
    fn every_scroll_operation_notifies() {
        let mut viewport = tall_viewport();
        let count = Rc::new(Cell::new(0));
        let _subscription = {
            let count = Rc::clone(&count);
            viewport.subscribe(move |_| count.set(count.get() + 1))
        };

        viewport.scroll_to_top();
        viewport.scroll_lines(-3);
        viewport.scroll_pages(1);
        viewport.scroll_to_bottom();
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn clamping_on_resize_publishes_new_offset() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);
        viewport.scroll_to(200);
        assert!(observer.is_elevated());

        viewport.update_dimensions(50, 40);
        assert_eq!(viewport.offset(), 10);
        assert!(!observer.is_elevated());
    }

    #[test]
    fn shrinking_page_and_terminal_together_keeps_offset() {
        let mut viewport = tall_viewport();
        let observer = ScrollObserver::mount(&viewport);
        viewport.scroll_to(25);
        assert!(observer.is_elevated());

        viewport.update_dimensions(45, 20);
        assert_eq!(viewport.offset(), 25);
        assert!(observer.is_elevated());
        assert_eq!(observer.transitions(), 1);
    }

    #[test]
    fn mount_seeds_flag_from_current_offset() {
        let mut viewport = tall_viewport();
        viewport.scroll_to(60);
        let observer = ScrollObserver::mount(&viewport);
        assert!(observer.is_elevated());
        assert_eq!(observer.transitions(), 0);
    }
}
