//! Scroll State Module
//!
//! Viewport measurements and the scroll-progress computation:
//! - `ViewportMetrics` - scroll offset, viewport height, document height
//! - `scroll_progress` - percentage scrolled, clamped to 0-100
//!
//! Measurements are read fresh by the surface for every frame; nothing here
//! caches layout.

// =============================================================================
// VIEWPORT METRICS
// =============================================================================

/// One snapshot of the page's scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Current vertical scroll offset (`window.scrollY`).
    pub scroll_top: f64,
    /// Visible height (`window.innerHeight`).
    pub viewport_height: f64,
    /// Full document height (`documentElement.scrollHeight`).
    pub document_height: f64,
}

impl ViewportMetrics {
    pub const fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Distance the page can scroll. Zero or negative when the document
    /// fits in the viewport.
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        self.scrollable_height().max(0.0)
    }

    /// Clamp a requested scroll offset into the valid range.
    pub fn clamp_scroll(&self, y: f64) -> f64 {
        y.clamp(0.0, self.max_scroll())
    }
}

// =============================================================================
// SCROLL PROGRESS
// =============================================================================

/// Percentage of the page scrolled, in `[0, 100]`.
///
/// A page with no scroll range reports 0. Overshoot (elastic scrolling,
/// stale metrics) is clamped.
pub fn scroll_progress(metrics: &ViewportMetrics) -> f64 {
    let scrollable = metrics.scrollable_height();
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let percent = metrics.scroll_top / scrollable * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// CSS width for the progress bar.
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}
