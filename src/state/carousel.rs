//! Carousel State - Page index, bounds, and input mapping
//!
//! Pure pagination state for the screenshot carousel:
//! - Current index (a `Signal` cell, clamped to `[0, max_index]`)
//! - Bounds derived from item count and items visible
//! - Track offset and button states for a given item width
//! - Swipe and key mapping to navigation commands
//!
//! No wraparound: at either end, movement in that direction is a no-op.

use spark_signals::{signal, Signal};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Opacity of an enabled navigation button.
pub const BUTTON_ENABLED_OPACITY: f64 = 1.0;

/// Opacity of a disabled navigation button.
pub const BUTTON_DISABLED_OPACITY: f64 = 0.5;

// =============================================================================
// COMMANDS
// =============================================================================

/// A navigation request, whatever its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Prev,
    Next,
}

impl CarouselCommand {
    /// Map a `KeyboardEvent.key` value. Only the horizontal arrows navigate.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

// =============================================================================
// CAROUSEL STATE
// =============================================================================

/// Pagination state. Created once per page with index 0.
pub struct CarouselState {
    /// Never handed out; the controller renders after each move.
    index: Signal<usize>,
    item_count: usize,
    items_visible: usize,
}

impl CarouselState {
    pub fn new(item_count: usize, items_visible: usize) -> Self {
        Self {
            index: signal(0),
            item_count,
            items_visible,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_visible(&self) -> usize {
        self.items_visible
    }

    /// Highest reachable index: `max(0, item_count - items_visible)`.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_visible)
    }

    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    pub fn can_prev(&self) -> bool {
        self.current_index() > 0
    }

    pub fn can_next(&self) -> bool {
        self.current_index() < self.max_index()
    }

    /// Step back one item.
    ///
    /// Returns `true` if the index moved, `false` if already at the start.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index.set(self.current_index() - 1);
        true
    }

    /// Step forward one item.
    ///
    /// Returns `true` if the index moved, `false` if already at the end.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index.set(self.current_index() + 1);
        true
    }

    /// Apply a command. Returns `true` if the index moved.
    pub fn apply(&mut self, command: CarouselCommand) -> bool {
        match command {
            CarouselCommand::Prev => self.prev(),
            CarouselCommand::Next => self.next(),
        }
    }

    /// Presentation for the current index at the given item geometry.
    pub fn frame(&self, item_width: f64, gap: f64) -> CarouselFrame {
        let index = self.current_index();
        CarouselFrame {
            translate_x: -(index as f64 * (item_width + gap)),
            prev_disabled: index == 0,
            next_disabled: index >= self.max_index(),
        }
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// What the track and buttons should look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    /// Horizontal track offset in pixels (zero or negative).
    pub translate_x: f64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl CarouselFrame {
    /// `translateX(...)` value for the track.
    pub fn transform(&self) -> String {
        // -0.0 would render as "-0px"
        let x = if self.translate_x == 0.0 { 0.0 } else { self.translate_x };
        format!("translateX({x}px)")
    }

    pub fn prev_opacity(&self) -> f64 {
        button_opacity(self.prev_disabled)
    }

    pub fn next_opacity(&self) -> f64 {
        button_opacity(self.next_disabled)
    }
}

fn button_opacity(disabled: bool) -> f64 {
    if disabled {
        BUTTON_DISABLED_OPACITY
    } else {
        BUTTON_ENABLED_OPACITY
    }
}

// =============================================================================
// SWIPE
// =============================================================================

/// Tracks one touch gesture on the track.
///
/// Only the horizontal screen coordinate of touch start and touch end
/// matter. Intermediate moves are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture.
    ///
    /// A leftward swipe (finger moves toward lower x) maps to `Next`.
    /// Travel must strictly exceed the threshold.
    pub fn touch_end(&mut self, x: f64) -> Option<CarouselCommand> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(CarouselCommand::Next)
        } else {
            Some(CarouselCommand::Prev)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
