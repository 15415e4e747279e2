//! ANSI 256-color fallback theme tailored for terminals without truecolor support.
//!
//! This palette approximates the lime house theme using indexed colors so the
//! page remains legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// ANSI 256-color approximation of the lime palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(16),
                surface: Color::Indexed(233),
                surface_muted: Color::Indexed(234),
                border: Color::Indexed(236),
                divider: Color::Indexed(235),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(252),
                text_muted: Color::Indexed(247),

                accent_primary: Color::Indexed(149),
                accent_secondary: Color::Indexed(79),
                accent_subtle: Color::Indexed(241),
                on_accent: Color::Indexed(16),

                success: Color::Indexed(79),
                warning: Color::Indexed(214),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(236),
                selection_fg: Color::Indexed(149),
                focus: Color::Indexed(149),

                scrollbar_track: Color::Indexed(234),
                scrollbar_thumb: Color::Indexed(239),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
