//! Effect Pipeline
//!
//! Controllers that connect the pure state machines to presentation
//! surfaces. Each controller is generic over a surface trait so it runs the
//! same against the DOM and against test doubles.
//!
//! # Pipeline Architecture
//!
//! ```text
//! scroll ─▶ FrameGate ─▶ ScrollEffects::run_frame ─▶ progress / navbar / parallax
//! click, key, touch ─▶ CarouselController ─▶ track transform + buttons
//! anchor click ─▶ SmoothScrollNavigator ─▶ per-frame scroll position
//! submit ─▶ ContactFormController ─▶ Notifier + FormSurface::reset
//! ```

pub mod carousel;
pub mod contact;
pub mod frame;
pub mod navigator;
pub mod scroll_effects;

pub use carousel::{CarouselController, CarouselSurface};
pub use contact::{
    ContactDelivery, ContactFormController, FormSurface, Notifier, SimulatedDelivery,
    SUCCESS_MESSAGE,
};
pub use frame::{FrameGate, FrameHandle, FrameScheduler};
pub use navigator::{target_position, AnchorAction, SmoothScrollNavigator, DEMO_ANCHOR, DEMO_MESSAGE};
pub use scroll_effects::{ScrollEffects, ScrollSurface};
