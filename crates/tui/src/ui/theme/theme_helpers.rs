use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Background style for the whole page.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for the navigation chrome.
///
/// Elevated chrome sits on the opaque surface color; otherwise the bar blends
/// into the page background.
pub fn chrome_style<T: Theme + ?Sized>(theme: &T, elevated: bool) -> Style {
    if elevated { panel_style(theme) } else { page_style(theme) }
}

/// Lighten an RGB color toward white by `amount` (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn lighten_rgb(color: Color, amount: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let a = amount.clamp(0.0, 1.0);
            let lift = |channel: u8| (channel as f32 + (255.0 - channel as f32) * a).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        accent_primary, on_accent, ..
    } = *theme.roles();
    let style = Style::default().bg(accent_primary).fg(on_accent).add_modifier(Modifier::BOLD);
    if focused { style.add_modifier(Modifier::UNDERLINED) } else { style }
}

/// Secondary button style (inverted: light surface, dark text).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        text, background, focus, ..
    } = *theme.roles();
    let bg = if focused { focus } else { text };
    Style::default().bg(bg).fg(background).add_modifier(Modifier::BOLD)
}

/// Ghost button style (muted surface, outline feel).
pub fn button_ghost_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        surface_muted, text, ..
    } = *theme.roles();
    Style::default().bg(surface_muted).fg(text).add_modifier(Modifier::BOLD)
}

/// Style for inline links; focused links are highlighted with the accent.
pub fn link_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    if focused {
        theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_muted_style()
    }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary, on_accent, ..
    } = *theme.roles();
    Style::default().bg(accent_primary).fg(on_accent).add_modifier(Modifier::BOLD)
}

/// Subdued tag chip used for portfolio tags.
pub fn chip_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        surface_muted, text_muted, ..
    } = *theme.roles();
    Style::default().bg(surface_muted).fg(text_muted)
}

/// Builds `key description` hint pairs with the key emphasized.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), theme.accent_emphasis_style()));
        spans.push(Span::styled(description.to_string(), theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_only_touches_rgb() {
        assert_eq!(lighten_rgb(Color::Rgb(0, 0, 0), 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(lighten_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }

    #[test]
    fn chrome_style_switches_background_with_elevation() {
        let theme = crate::ui::theme::LimeTheme::new();
        assert_eq!(chrome_style(&theme, true).bg, Some(theme.roles().surface));
        assert_eq!(chrome_style(&theme, false).bg, Some(theme.roles().background));
    }
}
