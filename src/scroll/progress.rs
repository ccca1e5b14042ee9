/// How far the page can scroll at all.
pub fn total_scrollable(document_height: f64, viewport_height: f64) -> f64 {
    (document_height - viewport_height).max(0.0)
}

/// Fraction of the scrollable height already traversed, in `[0, 1]`.
/// A page that cannot scroll reports `0`.
pub fn scroll_progress(offset: f64, total_scrollable: f64) -> f64 {
    if !(total_scrollable > 0.0) || offset.is_nan() {
        return 0.0;
    }
    (offset / total_scrollable).clamp(0.0, 1.0)
}
