//! Parallax layer math.
//!
//! Each background layer moves and grows with its distance from the top of
//! the viewport:
//!
//! ```text
//! distance = scroll_top - element_document_top
//! offset   = distance * offset_factor
//! scale    = 1 + min(distance / viewport_height * scale_factor, scale_cap)
//! ```
//!
//! The scale is capped from above only. Above the element (negative
//! distance) it shrinks slightly below 1, matching the stylesheet's
//! expectations.

use serde::Deserialize;

/// Per-layer factors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParallaxLayer {
    /// Vertical offset per pixel of distance.
    pub offset_factor: f64,
    /// Scale growth per viewport height of distance.
    pub scale_factor: f64,
    /// Maximum scale growth.
    pub scale_cap: f64,
    /// Multiplier from offset to the `--parallax-y` custom property.
    #[serde(default)]
    pub custom_property_factor: f64,
}

impl ParallaxLayer {
    pub const fn new(
        offset_factor: f64,
        scale_factor: f64,
        scale_cap: f64,
        custom_property_factor: f64,
    ) -> Self {
        Self {
            offset_factor,
            scale_factor,
            scale_cap,
            custom_property_factor,
        }
    }

    /// Compute this layer's transform for the current scroll position.
    pub fn transform(
        &self,
        scroll_top: f64,
        element_top: f64,
        viewport_height: f64,
    ) -> ParallaxTransform {
        let distance = scroll_top - element_top;
        let translate_y = distance * self.offset_factor;

        let scale = if viewport_height > 0.0 {
            1.0 + (distance / viewport_height * self.scale_factor).min(self.scale_cap)
        } else {
            1.0
        };

        ParallaxTransform {
            translate_y,
            scale,
            custom_offset: translate_y * self.custom_property_factor,
        }
    }
}

/// Output for one layer in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    pub translate_y: f64,
    pub scale: f64,
    /// Value for the `--parallax-y` custom property, in pixels.
    pub custom_offset: f64,
}

impl ParallaxTransform {
    /// `transform` style value.
    pub fn css(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }

    /// `--parallax-y` style value.
    pub fn custom_property(&self) -> String {
        format!("{}px", self.custom_offset)
    }
}
