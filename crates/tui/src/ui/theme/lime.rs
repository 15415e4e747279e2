//! The house palette: near-black surfaces, zinc greys and a lime accent.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::lighten_rgb,
};

// Zinc scale
pub const ZINC_950: Color = Color::Rgb(0x09, 0x09, 0x0B);
pub const ZINC_900: Color = Color::Rgb(0x18, 0x18, 0x1B);
pub const ZINC_800: Color = Color::Rgb(0x27, 0x27, 0x2A);
pub const ZINC_700: Color = Color::Rgb(0x3F, 0x3F, 0x46);
pub const ZINC_600: Color = Color::Rgb(0x52, 0x52, 0x5B);
pub const ZINC_500: Color = Color::Rgb(0x71, 0x71, 0x7A);
pub const ZINC_400: Color = Color::Rgb(0xA1, 0xA1, 0xAA);
pub const ZINC_300: Color = Color::Rgb(0xD4, 0xD4, 0xD8);
pub const WHITE: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);

// Accents
pub const LIME_400: Color = Color::Rgb(0xA3, 0xE6, 0x35);
pub const EMERALD_400: Color = Color::Rgb(0x34, 0xD3, 0x99);
pub const AMBER_400: Color = Color::Rgb(0xFB, 0xBF, 0x24);
pub const RED_400: Color = Color::Rgb(0xF8, 0x71, 0x71);

fn build_lime_roles() -> ThemeRoles {
    ThemeRoles {
        background: BLACK,
        surface: ZINC_950,
        surface_muted: ZINC_900,
        border: ZINC_800,
        divider: ZINC_900,

        text: WHITE,
        text_secondary: ZINC_300,
        text_muted: ZINC_400,

        accent_primary: LIME_400,
        accent_secondary: EMERALD_400,
        accent_subtle: ZINC_600,
        on_accent: BLACK,

        success: EMERALD_400,
        warning: AMBER_400,
        error: RED_400,

        selection_bg: ZINC_800,
        selection_fg: LIME_400,
        focus: LIME_400,

        scrollbar_track: ZINC_900,
        scrollbar_thumb: ZINC_700,
    }
}

fn build_lime_high_contrast_roles() -> ThemeRoles {
    let mut roles = build_lime_roles();
    roles.border = ZINC_600;
    roles.divider = ZINC_700;
    roles.text_secondary = WHITE;
    roles.text_muted = ZINC_300;
    roles.accent_subtle = ZINC_500;
    roles.scrollbar_thumb = lighten_rgb(roles.scrollbar_thumb, 0.30);
    roles
}

/// Default theme matching the site's dark lime look.
#[derive(Debug, Clone)]
pub struct LimeTheme {
    roles: ThemeRoles,
}

impl LimeTheme {
    pub fn new() -> Self {
        Self { roles: build_lime_roles() }
    }
}

impl Theme for LimeTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Lime variant with brighter borders and body copy for dim displays.
#[derive(Debug, Clone)]
pub struct LimeThemeHighContrast {
    roles: ThemeRoles,
}

impl LimeThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: build_lime_high_contrast_roles(),
        }
    }
}

impl Theme for LimeThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
