//! Decorative one-shot effects: button ripple, floating orbs, focus outline.
//!
//! Geometry and CSS text only. The adapter owns node creation and timers.

use crate::types::{ACCENT, Rect};

/// How long a ripple span lives before removal.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Injected once for `.btn-primary` ripples.
pub const RIPPLE_STYLESHEET: &str = r#"
    .btn-primary {
        position: relative;
        overflow: hidden;
    }
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }
    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
"#;

/// Injected once for the hero orbs.
pub const ORB_STYLESHEET: &str = r#"
    @keyframes float {
        0%, 100% {
            transform: translate(0, 0) scale(1);
            opacity: 0.5;
        }
        33% {
            transform: translate(30px, -30px) scale(1.1);
            opacity: 0.8;
        }
        66% {
            transform: translate(-20px, 20px) scale(0.9);
            opacity: 0.6;
        }
    }
"#;

// =============================================================================
// Ripple
// =============================================================================

/// Size and position of a ripple inside its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Square ripple covering the button's longer side, centered on the
    /// click point (viewport coordinates).
    pub fn at(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }

    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

// =============================================================================
// Floating orbs
// =============================================================================

/// Randomized parameters for one orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub width: f64,
    pub height: f64,
    /// Percent of the container.
    pub left: f64,
    pub top: f64,
    /// Seconds.
    pub duration: f64,
    pub delay: f64,
}

impl Orb {
    /// Draw an orb from a uniform `[0, 1)` source.
    pub fn sample(mut random: impl FnMut() -> f64) -> Self {
        Self {
            width: 100.0 + random() * 200.0,
            height: 100.0 + random() * 200.0,
            left: random() * 100.0,
            top: random() * 100.0,
            duration: 10.0 + random() * 10.0,
            delay: random() * 5.0,
        }
    }

    /// Full `style` attribute text.
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {}px; height: {}px; border-radius: 50%; \
             background: radial-gradient(circle, {} 0%, transparent 70%); \
             left: {}%; top: {}%; animation: float {}s ease-in-out infinite; \
             animation-delay: {}s;",
            self.width,
            self.height,
            ACCENT.with_alpha(51).to_css(),
            self.left,
            self.top,
            self.duration,
            self.delay,
        )
    }
}

// =============================================================================
// Focus outline
// =============================================================================

/// `outline` value applied on focus.
pub fn focus_outline() -> String {
    format!("2px solid {}", ACCENT.to_css())
}

/// `outline-offset` value applied on focus.
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centered_on_click() {
        let button = Rect::new(100.0, 50.0, 200.0, 40.0);
        let ripple = Ripple::at(button, 150.0, 70.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -80.0);
    }

    #[test]
    fn test_ripple_styles() {
        let ripple = Ripple {
            size: 80.0,
            left: 10.0,
            top: -5.0,
        };
        let styles = ripple.styles();
        assert_eq!(styles[0], ("width", "80px".to_string()));
        assert_eq!(styles[3], ("top", "-5px".to_string()));
    }

    #[test]
    fn test_orb_ranges() {
        let low = Orb::sample(|| 0.0);
        assert_eq!(low.width, 100.0);
        assert_eq!(low.duration, 10.0);
        assert_eq!(low.delay, 0.0);

        let mid = Orb::sample(|| 0.5);
        assert_eq!(mid.width, 200.0);
        assert_eq!(mid.left, 50.0);
        assert_eq!(mid.duration, 15.0);
        assert_eq!(mid.delay, 2.5);
    }

    #[test]
    fn test_orb_css_text() {
        let css = Orb::sample(|| 0.5).css_text();
        assert!(css.contains("width: 200px"));
        assert!(css.contains("rgba(183, 23, 219, 0.2)"));
        assert!(css.contains("animation: float 15s ease-in-out infinite"));
    }

    #[test]
    fn test_focus_outline() {
        assert_eq!(focus_outline(), "2px solid #B717DB");
    }
}
