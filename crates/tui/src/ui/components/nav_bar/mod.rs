//! Top navigation bar.
//!
//! - Elevated chrome derived from the page scroll offset
//! - Wide layout with inline links and a call to action
//! - Compact layout with a menu toggle and overlay panel
//! - rat-focus integration via a `FocusFlag` per target

mod menu;
mod nav_bar_component;
mod state;

pub use menu::MenuState;
pub use nav_bar_component::NavBarComponent;
pub use state::{MOBILE_BREAKPOINT, NAV_BAR_HEIGHT, NavBarState, NavTarget};
