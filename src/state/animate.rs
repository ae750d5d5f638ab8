//! Scroll Animation - Eased interpolation toward an anchor
//!
//! A `SmoothScroll` is a pure function of time: it is created with a start
//! and target offset and sampled with frame timestamps. The first sample
//! fixes the start time, the same way `requestAnimationFrame` timestamps
//! are used by the browser.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::state::animate::SmoothScroll;
//!
//! let mut anim = SmoothScroll::new(0.0, 1200.0);
//! let first = anim.sample(16.0);   // start time fixed here
//! let later = anim.sample(616.0);  // 600 ms in: finished
//! assert!(later.finished);
//! ```

// =============================================================================
// CONSTANTS
// =============================================================================

/// Milliseconds of animation per pixel of distance.
pub const MS_PER_PIXEL: f64 = 0.5;

/// Upper bound on any scroll animation.
pub const MAX_DURATION_MS: f64 = 1000.0;

// =============================================================================
// EASING
// =============================================================================

/// Cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Animation length for a scroll distance, in milliseconds.
pub fn scroll_duration(distance: f64) -> f64 {
    (distance.abs() * MS_PER_PIXEL).min(MAX_DURATION_MS)
}

// =============================================================================
// SMOOTH SCROLL
// =============================================================================

/// One position sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub position: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration: f64,
    started_at: Option<f64>,
}

impl SmoothScroll {
    pub fn new(start: f64, target: f64) -> Self {
        let distance = target - start;
        Self {
            start,
            distance,
            duration: scroll_duration(distance),
            started_at: None,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Position at frame time `now` (milliseconds).
    pub fn sample(&mut self, now: f64) -> ScrollStep {
        let started_at = *self.started_at.get_or_insert(now);

        // Nothing to animate: land on the target in the first frame
        if self.duration <= 0.0 {
            return ScrollStep {
                position: self.target(),
                finished: true,
            };
        }

        let elapsed = now - started_at;
        let progress = (elapsed / self.duration).clamp(0.0, 1.0);
        ScrollStep {
            position: self.start + self.distance * ease_in_out_cubic(progress),
            finished: elapsed >= self.duration,
        }
    }
}
