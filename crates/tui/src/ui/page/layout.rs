//! Line-level layout primitives: content frame, responsive grids and boxed cards.

use folio_util::{display_width, truncate_to_width};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::ui::theme::{Theme, theme_helpers as th};

/// Widest the centered content column grows, in columns.
pub const MAX_CONTENT_WIDTH: u16 = 150;
/// Widths at or above this use the large ("lg") grid.
pub const LARGE_BREAKPOINT: u16 = 160;
/// Widths at or above this use the medium ("md") grid and the desktop nav bar.
pub const MEDIUM_BREAKPOINT: u16 = 100;
/// Columns between cards in a grid row.
pub const GRID_GAP: usize = 2;

/// Horizontal placement of the centered content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFrame {
    pub left: u16,
    pub inner: u16,
}

impl ContentFrame {
    pub fn for_width(width: u16) -> Self {
        let inner = width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH.max(1));
        let left = width.saturating_sub(inner) / 2;
        Self { left, inner }
    }
}

/// Number of grid columns for a terminal width given the lg/md column counts.
pub fn grid_columns(width: u16, large: usize, medium: usize) -> usize {
    if width >= LARGE_BREAKPOINT {
        large.max(1)
    } else if width >= MEDIUM_BREAKPOINT {
        medium.max(1)
    } else {
        1
    }
}

/// Width of one card when `columns` cards share `inner` columns.
pub fn card_width(inner: u16, columns: usize) -> usize {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1);
    (usize::from(inner).saturating_sub(gaps) / columns).max(6)
}

/// Truncates or pads `spans` to exactly `width` columns, padding with `fill`.
pub fn fit_spans(spans: Vec<Span<'static>>, width: usize, fill: Style) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() + 1);
    let mut used = 0;
    for span in spans {
        if used >= width {
            break;
        }
        let span_width = span.width();
        if used + span_width <= width {
            used += span_width;
            out.push(span);
        } else {
            let text = truncate_to_width(&span.content, width - used);
            used += display_width(&text);
            out.push(Span::styled(text, span.style));
            break;
        }
    }
    if used < width {
        out.push(Span::styled(" ".repeat(width - used), fill));
    }
    out
}

/// Draws a rounded box of `width` columns around `body`.
///
/// Body lines are fitted to the interior and the box is at least
/// `min_body_height` rows tall.
pub fn boxed_card(theme: &dyn Theme, body: Vec<Line<'static>>, width: usize, min_body_height: usize) -> Vec<Line<'static>> {
    let width = width.max(4);
    let interior = width - 4;
    let border = theme.border_style(false).bg(theme.roles().surface);
    let fill = th::panel_style(theme);

    let mut lines = Vec::with_capacity(body.len().max(min_body_height) + 2);
    lines.push(Line::from(Span::styled(format!("╭{}╮", "─".repeat(width - 2)), border)));
    let blank_rows = min_body_height.saturating_sub(body.len());
    let rows = body.into_iter().chain(std::iter::repeat_with(Line::default).take(blank_rows));
    for row in rows {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(fit_spans(row.spans, interior, fill));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(format!("╰{}╯", "─".repeat(width - 2)), border)));
    lines
}

/// Lays out card bodies in rows of `columns`, boxing each card.
///
/// Cards in the same row share a height. Every output line starts with
/// `left` columns of margin.
pub fn card_grid(theme: &dyn Theme, bodies: Vec<Vec<Line<'static>>>, columns: usize, width: usize, left: u16) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let mut out = Vec::new();
    let mut bodies = bodies.into_iter().peekable();
    while bodies.peek().is_some() {
        let row: Vec<Vec<Line<'static>>> = bodies.by_ref().take(columns).collect();
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        let boxes: Vec<Vec<Line<'static>>> = row.into_iter().map(|body| boxed_card(theme, body, width, height)).collect();
        for line_index in 0..height + 2 {
            let mut spans = vec![Span::raw(" ".repeat(usize::from(left)))];
            for (box_index, card) in boxes.iter().enumerate() {
                if box_index > 0 {
                    spans.push(Span::raw(" ".repeat(GRID_GAP)));
                }
                if let Some(line) = card.get(line_index) {
                    spans.extend(line.spans.iter().cloned());
                }
            }
            out.push(Line::from(spans));
        }
        out.push(Line::default());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::LimeTheme;

    #[test]
    fn grid_columns_follow_breakpoints() {
        assert_eq!(grid_columns(200, 4, 2), 4);
        assert_eq!(grid_columns(120, 4, 2), 2);
        assert_eq!(grid_columns(80, 4, 2), 1);
    }

    #[test]
    fn content_frame_centers_the_column() {
        let frame = ContentFrame::for_width(80);
        assert_eq!(frame.inner, 76);
        assert_eq!(frame.left, 2);

        let wide = ContentFrame::for_width(300);
        assert_eq!(wide.inner, MAX_CONTENT_WIDTH);
        assert_eq!(wide.left, 75);
    }

    #[test]
    fn fit_spans_pads_and_truncates_to_exact_width() {
        let fitted = fit_spans(vec![Span::raw("Case"), Span::raw(" Study")], 6, Style::default());
        assert_eq!(Line::from(fitted.clone()).width(), 6);
        assert_eq!(Line::from(fitted).to_string(), "Case …");

        let padded = fit_spans(vec![Span::raw("AI")], 5, Style::default());
        assert_eq!(Line::from(padded).to_string(), "AI   ");
    }

    #[test]
    fn cards_in_a_row_share_height_and_width() {
        let theme = LimeTheme::new();
        let bodies = vec![
            vec![Line::from("one")],
            vec![Line::from("two"), Line::from("lines")],
            vec![Line::from("three")],
        ];
        let lines = card_grid(&theme, bodies, 2, 12, 1);
        // Row one: 2 body rows + 2 borders + spacer; row two: 1 body row + 2 borders + spacer.
        assert_eq!(lines.len(), 4 + 1 + 3 + 1);
        assert_eq!(lines[0].width(), 1 + 12 + GRID_GAP + 12);
        assert!(lines[0].to_string().trim_start().starts_with('╭'));
        assert_eq!(lines[5].width(), 1 + 12);
    }
}
