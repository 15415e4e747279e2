//! Width-aware text helpers for laying out fixed-width terminal cards.
//!
//! All widths are terminal display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Truncates `text` so it fits in `max_width` columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Wraps `text` into lines no wider than `width` columns.
///
/// Empty input yields no lines. At most `max_lines` lines are returned when a
/// limit is given; the last kept line ends with `…` if text was dropped.
pub fn wrap_to_width(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let width = width.max(1);
    let mut lines: Vec<String> = textwrap::wrap(text, width).into_iter().map(|line| line.into_owned()).collect();
    if let Some(limit) = max_lines
        && lines.len() > limit
    {
        lines.truncate(limit);
        if let Some(last) = lines.last_mut() {
            let trimmed = truncate_to_width(last, width.saturating_sub(1));
            *last = format!("{}{ELLIPSIS}", trimmed.trim_end_matches(ELLIPSIS));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Storytelling", 6), "Story…");
        assert_eq!(truncate_to_width("AI", 6), "AI");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn wrapping_clamps_and_marks_dropped_text() {
        let text = "Helping B2B SaaS and E-commerce brands grow through strategic content systems";
        let lines = wrap_to_width(text, 20, Some(2));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'), "last line: {}", lines[1]);
        assert!(lines.iter().all(|l| display_width(l) <= 20));
    }

    #[test]
    fn wrapping_empty_text_yields_nothing() {
        assert!(wrap_to_width("   ", 10, None).is_empty());
    }
}
