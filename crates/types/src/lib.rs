//! Shared type definitions for Folio.
//!
//! The content records consumed by every section of the page live here, along
//! with the message and effect enums that flow between the runtime and the UI
//! components.

pub mod content;
pub mod messages;

pub use content::{ContentCatalog, IconTag, Keyed, NavItem, PortfolioEntry, Skill, Testimonial};
pub use messages::{Effect, Msg};
