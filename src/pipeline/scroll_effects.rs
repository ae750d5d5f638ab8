//! Scroll Effects - Per-frame progress, navbar and parallax update
//!
//! ```text
//! scroll ──▶ on_scroll ──(gate closed?)──▶ request frame
//!                                              │
//!                  ┌───────────────────────────┘
//!                  ▼
//!             run_frame: progress ─▶ navbar ─▶ parallax ─▶ release gate
//! ```
//!
//! However many scroll events arrive between two frames, `run_frame` runs
//! once. The three updates always run in the order above.

use tracing::trace;

use super::frame::{FrameGate, FrameScheduler};
use crate::state::navbar::SharedNavbar;
use crate::state::parallax::{ParallaxLayer, ParallaxTransform};
use crate::state::scroll::{scroll_progress, ViewportMetrics};

/// Where the scroll effects read from and write to.
///
/// Implementations treat missing elements as no-ops.
pub trait ScrollSurface {
    /// Current scroll geometry. `None` if the page cannot be measured.
    fn metrics(&self) -> Option<ViewportMetrics>;

    /// Progress bar width, in percent.
    fn set_progress(&mut self, percent: f64);

    fn set_navbar_scrolled(&mut self, scrolled: bool);

    /// Viewport-relative top of parallax layer `index`, if it exists.
    fn layer_top(&self, index: usize) -> Option<f64>;

    fn apply_parallax(&mut self, index: usize, transform: &ParallaxTransform);
}

pub struct ScrollEffects<S> {
    surface: S,
    navbar: SharedNavbar,
    layers: Vec<ParallaxLayer>,
    gate: FrameGate,
    last_scroll: f64,
    frames_run: u64,
}

impl<S: ScrollSurface> ScrollEffects<S> {
    pub fn new(surface: S, navbar: SharedNavbar, layers: Vec<ParallaxLayer>) -> Self {
        Self {
            surface,
            navbar,
            layers,
            gate: FrameGate::new(),
            last_scroll: 0.0,
            frames_run: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn is_frame_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Scroll offset seen by the last completed frame.
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Scroll event handler. Returns `true` if it requested a frame.
    pub fn on_scroll(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        self.gate.request(scheduler)
    }

    /// Drop a pending frame without running it.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        self.gate.cancel(scheduler);
    }

    /// Animation-frame callback.
    pub fn run_frame(&mut self) {
        self.frames_run += 1;

        if let Some(metrics) = self.surface.metrics() {
            let percent = scroll_progress(&metrics);
            self.surface.set_progress(percent);

            self.update_navbar(metrics.scroll_top);
            self.update_parallax(&metrics);

            self.last_scroll = metrics.scroll_top;
        }

        self.gate.complete();
    }

    fn update_navbar(&mut self, scroll_top: f64) {
        let mut nav = self.navbar.get();
        if let Some(scrolled) = nav.update_scroll(scroll_top) {
            trace!(target: "landing::scroll", scrolled, scroll_top, "navbar state changed");
        }
        self.navbar.set(nav);
        self.surface.set_navbar_scrolled(nav.is_scrolled());
    }

    fn update_parallax(&mut self, metrics: &ViewportMetrics) {
        for (index, layer) in self.layers.iter().enumerate() {
            let Some(top) = self.surface.layer_top(index) else {
                continue;
            };
            let element_top = top + metrics.scroll_top;
            let transform =
                layer.transform(metrics.scroll_top, element_top, metrics.viewport_height);
            self.surface.apply_parallax(index, &transform);
        }
    }
}
