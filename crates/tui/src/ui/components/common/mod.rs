mod scroll_metrics;
mod scrollbar;

pub use scroll_metrics::ScrollMetrics;
pub use scrollbar::render_vertical_scrollbar;
