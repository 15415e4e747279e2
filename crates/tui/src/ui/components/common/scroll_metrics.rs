//! Scrolling metrics for the page viewport.
//!
//! Tracks content height, viewport height, and the current scroll offset
//! while providing bounded line/page navigation helpers.

/// Metrics for vertical scrolling.
///
/// The metrics use terminal row units (`u16`) so they can be applied directly
/// to ratatui paragraph scrolling and scrollbar calculations. Every mutator
/// keeps `offset <= max_offset()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    /// Returns current vertical scroll offset.
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Returns measured content height.
    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Returns measured viewport height.
    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Returns whether content exceeds the current viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Records both heights, then clamps the offset once against the new range.
    pub fn update_dimensions(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let current = i32::from(self.offset);
        let max = i32::from(self.max_offset());
        let next = (current + i32::from(delta)).clamp(0, max);
        self.offset = next as u16;
    }

    /// Scrolls by viewport page increments.
    pub fn scroll_pages(&mut self, delta_pages: i16) {
        if delta_pages == 0 || self.viewport_height == 0 {
            return;
        }
        let delta = i32::from(self.viewport_height).saturating_mul(i32::from(delta_pages));
        self.scroll_lines(delta.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16);
    }

    /// Moves scroll position to `offset`, clamped to the valid range.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    /// Moves scroll position to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Moves scroll position to the last visible window.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollMetrics;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_dimensions(20, 5);

        metrics.scroll_lines(3);
        assert_eq!(metrics.offset(), 3);

        metrics.scroll_lines(-10);
        assert_eq!(metrics.offset(), 0);

        metrics.scroll_to_bottom();
        assert_eq!(metrics.offset(), 15);

        metrics.scroll_to(40);
        assert_eq!(metrics.offset(), 15);
        metrics.scroll_to(7);
        assert_eq!(metrics.offset(), 7);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_dimensions(100, 10);
        metrics.scroll_to(80);

        metrics.update_dimensions(50, 10);
        assert_eq!(metrics.offset(), 40);
        assert!(metrics.is_scrollable());
    }

    #[test]
    fn shrinking_content_and_viewport_together_keeps_valid_offset() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_dimensions(500, 40);
        metrics.scroll_to(25);

        metrics.update_dimensions(45, 20);
        assert_eq!(metrics.max_offset(), 25);
        assert_eq!(metrics.offset(), 25);
    }

    #[test]
    fn page_scrolling_uses_viewport_height() {
        let mut metrics = ScrollMetrics::default();
        metrics.update_dimensions(40, 4);

        metrics.scroll_pages(1);
        assert_eq!(metrics.offset(), 4);

        metrics.scroll_pages(2);
        assert_eq!(metrics.offset(), 12);

        metrics.scroll_pages(-1);
        assert_eq!(metrics.offset(), 8);
    }
}
