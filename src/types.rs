//! Core types for spark-landing.
//!
//! Plain values that flow from the pure state machines to the presentation
//! surfaces: colors, rectangles, and the CSS strings built from them.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create from a 24-bit RGB integer (0xRRGGBB).
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// CSS representation.
    ///
    /// Opaque colors render as `#RRGGBB`, translucent ones as
    /// `rgba(r, g, b, a)` with alpha in 0-1.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f64 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Brand accent, used for focus outlines and the success toast.
pub const ACCENT: Rgba = Rgba::from_rgb_int(0xB717DB);

/// Second stop of the success gradient.
pub const ACCENT_END: Rgba = Rgba::from_rgb_int(0xD127AE);

/// Error toast gradient stops.
pub const ERROR_START: Rgba = Rgba::from_rgb_int(0xFF6B6B);
pub const ERROR_END: Rgba = Rgba::from_rgb_int(0xEE5A6F);

/// Two-stop diagonal gradient, as used by the toast backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgba,
    pub to: Rgba,
}

impl Gradient {
    pub const fn new(from: Rgba, to: Rgba) -> Self {
        Self { from, to }
    }

    /// `linear-gradient(135deg, FROM 0%, TO 100%)`
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Viewport-relative bounding box, mirroring `DOMRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_rgb_int_brand_colors() {
        assert_eq!(ACCENT, Rgba::rgb(183, 23, 219));
        assert_eq!(ACCENT_END, Rgba::rgb(209, 39, 174));
        assert_eq!(ERROR_START, Rgba::rgb(255, 107, 107));
    }

    #[test]
    fn test_rgba_to_css() {
        assert_eq!(ACCENT.to_css(), "#B717DB");
        assert_eq!(ACCENT.with_alpha(51).to_css(), "rgba(183, 23, 219, 0.2)");
        assert_eq!(Rgba::rgb(255, 255, 255).with_alpha(153).to_css(), "rgba(255, 255, 255, 0.6)");
    }

    #[test]
    fn test_gradient_to_css() {
        let success = Gradient::new(ACCENT, ACCENT_END);
        assert_eq!(
            success.to_css(),
            "linear-gradient(135deg, #B717DB 0%, #D127AE 100%)"
        );
    }
}
