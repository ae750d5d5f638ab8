//! Page configuration.
//!
//! Every knob has a default matching the shipped stylesheet. A page can
//! override any subset by embedding JSON:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "anchor_offset": 96, "carousel": { "items_visible": 2 } }
//! </script>
//! ```

use serde::Deserialize;

use crate::error::{LandingError, LandingResult};
use crate::state::parallax::ParallaxLayer;

/// Element id of the embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Top-level config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Pixels left above an anchor target after smooth scrolling
    /// (navbar + progress bar height).
    pub anchor_offset: f64,
    /// Scroll offset past which the navbar switches to its compact style.
    pub navbar_threshold: f64,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub parallax: Vec<ParallaxLayerConfig>,
    /// Decorative orbs placed in the hero background.
    pub orb_count: usize,
    /// `EnvFilter` directive for the console logger.
    pub log_filter: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            anchor_offset: 84.0,
            navbar_threshold: 100.0,
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            parallax: vec![
                ParallaxLayerConfig {
                    selector: ".hero-background".into(),
                    layer: ParallaxLayer::new(0.4, 0.1, 0.15, 0.3),
                },
                ParallaxLayerConfig {
                    selector: ".ai-background".into(),
                    layer: ParallaxLayer::new(0.25, 0.08, 0.12, 0.2),
                },
            ],
            orb_count: 5,
            log_filter: "info".into(),
        }
    }
}

impl LandingConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> LandingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the embedded config text, if any.
    ///
    /// A parse failure yields the defaults along with the error, so the
    /// caller can report it once logging is up.
    pub fn resolve(json: Option<&str>) -> (Self, Option<LandingError>) {
        match json.map(Self::from_json) {
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
            None => (Self::default(), None),
        }
    }

    /// The configured layers, in registration order.
    pub fn parallax_layers(&self) -> Vec<ParallaxLayer> {
        self.parallax.iter().map(|c| c.layer).collect()
    }
}

/// Carousel geometry and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub items_visible: usize,
    /// Gap between items in pixels (0.5rem).
    pub gap: f64,
    /// Used when the first item has no measurable width.
    pub fallback_item_width: f64,
    /// Minimum horizontal travel for a touch to count as a swipe.
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items_visible: 3,
            gap: 8.0,
            fallback_item_width: 300.0,
            swipe_threshold: 50.0,
        }
    }
}

/// Reveal-on-scroll observer tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Root margin shrink at the bottom edge, in pixels.
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl RevealConfig {
    /// `rootMargin` string for `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// A parallax layer bound to a selector.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParallaxLayerConfig {
    pub selector: String,
    #[serde(flatten)]
    pub layer: ParallaxLayer,
}
