//! State Module - Pure state machines behind the page effects
//!
//! Nothing here touches the DOM. Each submodule owns one piece of state and
//! exposes the computation the adapters apply:
//!
//! - **Carousel** - page index, bounds, swipe and key mapping
//! - **Scroll** - viewport metrics and progress percentage
//! - **Navbar** - scrolled flag and mobile menu flag
//! - **Parallax** - per-layer offset and scale
//! - **Reveal** - one-shot intersection registry
//! - **Animate** - eased smooth-scroll interpolation
//! - **Form** - contact form validation
//! - **Notify** - single-slot toast lifecycle
//! - **Decor** - ripple, orb and focus outline geometry

pub mod animate;
pub mod carousel;
pub mod decor;
pub mod form;
pub mod navbar;
pub mod notify;
pub mod parallax;
pub mod reveal;
pub mod scroll;

pub use animate::{ease_in_out_cubic, scroll_duration, ScrollStep, SmoothScroll};
pub use carousel::{CarouselCommand, CarouselFrame, CarouselState, SwipeTracker};
pub use form::{is_valid_email, validate, ContactFields, ContactSubmission};
pub use navbar::{NavFlags, NavbarState, SharedNavbar};
pub use notify::{Notice, NoticeId, NoticeKind, NoticePhase, NoticeSlot};
pub use parallax::{ParallaxLayer, ParallaxTransform};
pub use reveal::{IntersectionSample, RevealKey, RevealOutcome, RevealRegistry};
pub use scroll::{scroll_progress, ViewportMetrics};
