//! Smooth scrolling to in-page anchors.
//!
//! A new navigation cancels the one in flight: its pending frame is
//! cancelled and its animation dropped, so two loops never fight over the
//! scroll position.

use tracing::debug;

use super::frame::{FrameGate, FrameScheduler};
use crate::state::animate::SmoothScroll;
use crate::state::scroll::ViewportMetrics;

/// Anchor reserved for the demo button.
pub const DEMO_ANCHOR: &str = "#demo";

/// Shown when the demo button is clicked.
pub const DEMO_MESSAGE: &str = "Demo video coming soon!";

/// How a clicked link should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Smooth-scroll to the element matching this selector.
    SmoothScroll(&'a str),
    /// Show the demo notice instead of navigating.
    Demo,
    /// Leave the click to the browser.
    Native,
}

impl<'a> AnchorAction<'a> {
    pub fn classify(href: &'a str) -> Self {
        match href {
            DEMO_ANCHOR => AnchorAction::Demo,
            "#" => AnchorAction::Native,
            _ if href.starts_with('#') => AnchorAction::SmoothScroll(href),
            _ => AnchorAction::Native,
        }
    }
}

/// Scroll offset that puts an element `offset` pixels below the viewport
/// top.
pub fn target_position(element_viewport_top: f64, scroll_top: f64, offset: f64) -> f64 {
    element_viewport_top + scroll_top - offset
}

pub struct SmoothScrollNavigator {
    offset: f64,
    active: Option<SmoothScroll>,
    gate: FrameGate,
}

impl SmoothScrollNavigator {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: None,
            gate: FrameGate::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Begin scrolling toward an element whose bounding top (viewport
    /// coordinates) is `element_viewport_top`.
    ///
    /// The target is clamped to the page's scroll range. Returns the target.
    pub fn start(
        &mut self,
        metrics: ViewportMetrics,
        element_viewport_top: f64,
        scheduler: &mut impl FrameScheduler,
    ) -> f64 {
        self.cancel(scheduler);

        let target = metrics.clamp_scroll(target_position(
            element_viewport_top,
            metrics.scroll_top,
            self.offset,
        ));
        let animation = SmoothScroll::new(metrics.scroll_top, target);
        debug!(
            target: "landing::navigator",
            from = metrics.scroll_top,
            to = target,
            duration_ms = animation.duration(),
            "smooth scroll started"
        );

        self.active = Some(animation);
        self.gate.request(scheduler);
        target
    }

    /// Frame callback. Returns the scroll position to apply, if animating.
    pub fn on_frame(&mut self, now: f64, scheduler: &mut impl FrameScheduler) -> Option<f64> {
        self.gate.complete();
        let animation = self.active.as_mut()?;
        let step = animation.sample(now);

        if step.finished {
            self.active = None;
        } else {
            self.gate.request(scheduler);
        }
        Some(step.position)
    }

    /// Stop any animation in flight.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) {
        self.gate.cancel(scheduler);
        self.active = None;
    }
}
