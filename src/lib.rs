//! # spark-landing
//!
//! Landing page effects for the browser, compiled to WebAssembly.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! carousel index.
//!
//! ## Architecture
//!
//! Every effect is split in three layers:
//! ```text
//! state (pure machines) → pipeline (controllers over surface traits) → dom (web-sys surfaces)
//! ```
//!
//! `state` and `pipeline` build and test on any target. `dom` exists only on
//! `wasm32` and is the only code that touches the page.
//!
//! ## Modules
//!
//! - [`types`] - Colors, gradients, bounding boxes
//! - [`state`] - Carousel, scroll, navbar, parallax, reveal, animation, form, toast
//! - [`pipeline`] - Frame coalescing and the controllers that drive surfaces
//! - [`config`] - Page configuration embedded as JSON
//! - [`error`] - `LandingError` and user-facing messages
//! - [`logging`] - `tracing` subscriber for the browser console

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod state;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-export commonly used items
pub use types::*;

pub use config::{CarouselConfig, LandingConfig, ParallaxLayerConfig, RevealConfig};
pub use error::{FormField, LandingError, LandingResult};
pub use logging::init_logging;

pub use pipeline::{
    AnchorAction, CarouselController, CarouselSurface, ContactDelivery, ContactFormController,
    FormSurface, FrameGate, FrameHandle, FrameScheduler, Notifier, ScrollEffects, ScrollSurface,
    SimulatedDelivery, SmoothScrollNavigator,
};

pub use state::{
    CarouselCommand, CarouselFrame, CarouselState, ContactFields, ContactSubmission,
    IntersectionSample, NavbarState, NoticeKind, NoticeSlot, ParallaxLayer, ParallaxTransform,
    RevealOutcome, RevealRegistry, SmoothScroll, SwipeTracker, ViewportMetrics,
};

#[cfg(target_arch = "wasm32")]
pub use dom::{mount, MountHandle};

// =============================================================================
// Entry point
// =============================================================================

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;

    /// Runs when the module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        if let Err(err) = crate::dom::mount() {
            crate::logging::init_logging("info");
            tracing::error!(target: "landing::mount", %err, "landing page not mounted");
        }
    }
}
