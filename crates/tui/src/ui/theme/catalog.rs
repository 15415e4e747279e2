use ratatui::style::Color;

use super::{Ansi256Theme, LimeTheme, LimeThemeHighContrast, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier accepted by `--theme` and `FOLIO_THEME`.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Short description printed by `--list-themes`.
    pub description: &'static str,
    /// Accent color, shown next to the id in listings.
    pub accent: Color,
    /// Theme aliases that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of themes surfaced by the loader.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "lime",
        label: "Lime",
        description: "Near-black surfaces with a lime accent.",
        accent: Color::Rgb(0xA3, 0xE6, 0x35),
        aliases: &["lime", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(LimeTheme::new()),
    },
    ThemeDefinition {
        id: "lime_hc",
        label: "Lime High Contrast",
        description: "Lime with brighter borders and body copy.",
        accent: Color::Rgb(0xA3, 0xE6, 0x35),
        aliases: &["lime_hc", "lime-hc", "lime-high-contrast"],
        is_ansi_fallback: false,
        factory: || Box::new(LimeThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        description: "Calm polar blues with aurora semantic accents.",
        accent: Color::Rgb(0x88, 0xC0, 0xD0),
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        description: "Indexed fallback for 8-bit terminals.",
        accent: Color::Indexed(149),
        aliases: &["ansi256", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[THEME_DEFINITIONS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("LIME").map(|d| d.id), Some("lime"));
        assert_eq!(resolve("lime-high-contrast").map(|d| d.id), Some("lime_hc"));
        assert_eq!(resolve("256").map(|d| d.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn defaults_point_at_expected_palettes() {
        assert_eq!(default_truecolor().id, "lime");
        assert!(default_ansi().is_ansi_fallback);
    }
}
