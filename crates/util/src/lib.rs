//! Utility helpers shared by the Folio crates.

pub mod path_processing;
pub mod text_layout;

pub use path_processing::expand_tilde;
pub use text_layout::{display_width, truncate_to_width, wrap_to_width};
