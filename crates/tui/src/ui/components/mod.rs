//! UI components: navigation bar, floating chat button, shared scroll widgets.

pub mod chat_button;
pub mod common;
pub mod component;
pub mod nav_bar;

pub use chat_button::ChatButtonComponent;
pub(crate) use component::Component;
pub use nav_bar::{NavBarComponent, NavBarState};
