use folio_util::{display_width, truncate_to_width, wrap_to_width};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{PageLink, layout::ContentFrame};

/// Horizontal placement of a row inside the content column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
}

/// Accumulates the rows of one section, relative to the section's first row.
pub(crate) struct SectionBuilder {
    frame: ContentFrame,
    lines: Vec<Line<'static>>,
    links: Vec<PageLink>,
}

impl SectionBuilder {
    pub fn new(frame: ContentFrame) -> Self {
        Self {
            frame,
            lines: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn inner_width(&self) -> usize {
        usize::from(self.frame.inner)
    }

    pub fn blank(&mut self, rows: usize) {
        self.lines.extend(std::iter::repeat_with(Line::default).take(rows));
    }

    /// Pushes a row of spans, clipped to the content column.
    pub fn row(&mut self, spans: Vec<Span<'static>>, align: Align) {
        let clipped = clip_spans(spans, self.inner_width());
        let width: usize = clipped.iter().map(Span::width).sum();
        let left = self.left_padding(width, align);
        let mut line = vec![Span::raw(" ".repeat(usize::from(left)))];
        line.extend(clipped);
        self.lines.push(Line::from(line));
    }

    /// Wraps `text` to at most `max_width` columns and pushes each row.
    pub fn paragraph(&mut self, text: &str, style: Style, max_width: usize, align: Align) {
        let width = max_width.min(self.inner_width()).max(1);
        for row in wrap_to_width(text, width, None) {
            self.row(vec![Span::styled(row, style)], align);
        }
    }

    /// Pushes a row of buttons separated by `gap` columns.
    ///
    /// Buttons with an anchor are recorded as links. Buttons that do not fit
    /// on the row wrap onto the following rows.
    pub fn buttons(&mut self, buttons: Vec<(Span<'static>, Option<String>)>, gap: usize, align: Align) {
        let inner = self.inner_width();
        let mut rows: Vec<Vec<(Span<'static>, Option<String>)>> = vec![Vec::new()];
        let mut used = 0;
        for (label, anchor) in buttons {
            let label = if label.width() > inner {
                Span::styled(truncate_to_width(&label.content, inner), label.style)
            } else {
                label
            };
            let needed = label.width() + if used == 0 { 0 } else { gap };
            if used > 0 && used + needed > inner {
                rows.push(Vec::new());
                used = 0;
            }
            used += if used == 0 { label.width() } else { needed };
            if let Some(current) = rows.last_mut() {
                current.push((label, anchor));
            }
        }

        for (index, row) in rows.into_iter().filter(|row| !row.is_empty()).enumerate() {
            if index > 0 {
                self.blank(1);
            }
            let width: usize = row.iter().map(|(label, _)| label.width()).sum::<usize>() + gap * (row.len() - 1);
            let mut column = self.left_padding(width, align);
            let row_index = self.next_row();
            let mut spans = vec![Span::raw(" ".repeat(usize::from(column)))];
            for (position, (label, anchor)) in row.into_iter().enumerate() {
                if position > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                    column = column.saturating_add(gap as u16);
                }
                let label_width = label.width() as u16;
                if let Some(anchor) = anchor {
                    self.links.push(PageLink {
                        row: row_index,
                        start: column,
                        end: column.saturating_add(label_width),
                        anchor,
                    });
                }
                column = column.saturating_add(label_width);
                spans.push(label);
            }
            self.lines.push(Line::from(spans));
        }
    }

    /// Pushes pre-laid-out rows (e.g. a card grid) verbatim.
    pub fn extend(&mut self, lines: Vec<Line<'static>>) {
        self.lines.extend(lines);
    }

    /// Full-width divider across the content column.
    pub fn divider(&mut self, style: Style) {
        self.row(vec![Span::styled("─".repeat(self.inner_width()), style)], Align::Left);
    }

    pub fn frame(&self) -> ContentFrame {
        self.frame
    }

    pub fn finish(self) -> (Vec<Line<'static>>, Vec<PageLink>) {
        (self.lines, self.links)
    }

    fn next_row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn left_padding(&self, width: usize, align: Align) -> u16 {
        match align {
            Align::Left => self.frame.left,
            Align::Center => {
                let slack = self.inner_width().saturating_sub(width) / 2;
                self.frame.left.saturating_add(u16::try_from(slack).unwrap_or(0))
            }
        }
    }
}

/// Truncates `spans` so their total width is at most `max` columns.
pub(crate) fn clip_spans(spans: Vec<Span<'static>>, max: usize) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len());
    let mut used = 0;
    for span in spans {
        let width = span.width();
        if used + width <= max {
            used += width;
            out.push(span);
            continue;
        }
        let remaining = max.saturating_sub(used);
        if remaining > 0 {
            let text = truncate_to_width(&span.content, remaining);
            used += display_width(&text);
            out.push(Span::styled(text, span.style));
        }
        break;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(inner: u16) -> ContentFrame {
        ContentFrame { left: 2, inner }
    }

    #[test]
    fn centered_rows_are_padded_from_the_frame_edge() {
        let mut builder = SectionBuilder::new(frame(20));
        builder.row(vec![Span::raw("abcd")], Align::Center);
        let (lines, _) = builder.finish();
        assert_eq!(lines[0].to_string(), format!("{}abcd", " ".repeat(2 + 8)));
    }

    #[test]
    fn buttons_record_link_columns() {
        let mut builder = SectionBuilder::new(frame(40));
        builder.blank(2);
        builder.buttons(
            vec![
                (Span::raw("[ Work ]"), Some("#portfolio".to_string())),
                (Span::raw("[ Skip ]"), None),
            ],
            2,
            Align::Left,
        );
        let (_, links) = builder.finish();
        assert_eq!(
            links,
            vec![PageLink {
                row: 2,
                start: 2,
                end: 10,
                anchor: "#portfolio".into()
            }]
        );
    }

    #[test]
    fn buttons_wrap_when_the_row_is_full() {
        let mut builder = SectionBuilder::new(frame(12));
        builder.buttons(
            vec![
                (Span::raw("[ One ]"), Some("#a".to_string())),
                (Span::raw("[ Two ]"), Some("#b".to_string())),
            ],
            2,
            Align::Left,
        );
        let (lines, links) = builder.finish();
        assert_eq!(lines.len(), 3);
        assert_eq!(links[0].row, 0);
        assert_eq!(links[1].row, 2);
    }

    #[test]
    fn clip_spans_truncates_with_ellipsis() {
        let clipped = clip_spans(vec![Span::raw("Driving "), Span::raw("ROI")], 10);
        assert_eq!(Line::from(clipped).to_string(), "Driving R…");
    }
}
