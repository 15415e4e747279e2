//! UI for the page: composition, components, scrolling, theming and the runtime.

pub mod components;
pub mod icons;
pub mod main_component;
pub mod page;
pub mod projection;
pub mod runtime;
pub mod scroll;
pub mod theme;
