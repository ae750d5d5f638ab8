//! Carousel Controller - State plus presentation
//!
//! Wraps `CarouselState` with the surface it renders to and the three input
//! adapters (buttons, keyboard, touch). Every successful move re-renders;
//! blocked moves leave the track untouched.
//!
//! Item width is measured on every render, never cached, so layout changes
//! between renders are picked up.

use tracing::debug;

use crate::config::CarouselConfig;
use crate::state::carousel::{CarouselCommand, CarouselFrame, CarouselState, SwipeTracker};

/// Track and buttons of one carousel.
///
/// Implementations treat missing elements as no-ops.
pub trait CarouselSurface {
    /// Rendered width of the first item. `None` when no item is laid out.
    fn item_width(&self) -> Option<f64>;

    fn set_track_transform(&mut self, transform: &str);

    fn set_prev_button(&mut self, disabled: bool, opacity: f64);

    fn set_next_button(&mut self, disabled: bool, opacity: f64);
}

pub struct CarouselController<S> {
    state: CarouselState,
    surface: S,
    swipe: SwipeTracker,
    gap: f64,
    fallback_item_width: f64,
}

impl<S: CarouselSurface> CarouselController<S> {
    pub fn new(surface: S, item_count: usize, config: &CarouselConfig) -> Self {
        Self {
            state: CarouselState::new(item_count, config.items_visible),
            surface,
            swipe: SwipeTracker::new(config.swipe_threshold),
            gap: config.gap,
            fallback_item_width: config.fallback_item_width,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn prev(&mut self) -> bool {
        self.apply(CarouselCommand::Prev)
    }

    pub fn next(&mut self) -> bool {
        self.apply(CarouselCommand::Next)
    }

    /// Apply a command and re-render if the index moved.
    pub fn apply(&mut self, command: CarouselCommand) -> bool {
        if !self.state.apply(command) {
            return false;
        }
        debug!(
            target: "landing::carousel",
            ?command,
            index = self.state.current_index(),
            "carousel moved"
        );
        self.render();
        true
    }

    /// Measure, compute and apply the current frame.
    pub fn render(&mut self) -> CarouselFrame {
        let item_width = self
            .surface
            .item_width()
            .filter(|w| *w > 0.0)
            .unwrap_or(self.fallback_item_width);
        let frame = self.state.frame(item_width, self.gap);

        self.surface.set_track_transform(&frame.transform());
        self.surface
            .set_prev_button(frame.prev_disabled, frame.prev_opacity());
        self.surface
            .set_next_button(frame.next_disabled, frame.next_opacity());
        frame
    }

    /// Document-wide `keydown`. Returns `true` if the key navigated.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match CarouselCommand::from_key(key) {
            Some(command) => self.apply(command),
            None => false,
        }
    }

    /// `touchstart` on the track, with the first changed touch's screen x.
    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    /// `touchend` on the track. Returns `true` if the swipe navigated.
    pub fn touch_end(&mut self, x: f64) -> bool {
        match self.swipe.touch_end(x) {
            Some(command) => self.apply(command),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeCarousel {
        width: Option<f64>,
        transforms: Vec<String>,
        prev: Option<(bool, f64)>,
        next: Option<(bool, f64)>,
    }

    impl CarouselSurface for FakeCarousel {
        fn item_width(&self) -> Option<f64> {
            self.width
        }

        fn set_track_transform(&mut self, transform: &str) {
            self.transforms.push(transform.to_string());
        }

        fn set_prev_button(&mut self, disabled: bool, opacity: f64) {
            self.prev = Some((disabled, opacity));
        }

        fn set_next_button(&mut self, disabled: bool, opacity: f64) {
            self.next = Some((disabled, opacity));
        }
    }

    fn setup(items: usize, width: Option<f64>) -> CarouselController<FakeCarousel> {
        let surface = FakeCarousel {
            width,
            ..Default::default()
        };
        CarouselController::new(surface, items, &CarouselConfig::default())
    }

    #[test]
    fn test_initial_render() {
        let mut carousel = setup(6, Some(250.0));
        carousel.render();

        let surface = carousel.surface();
        assert_eq!(surface.transforms, vec!["translateX(0px)"]);
        assert_eq!(surface.prev, Some((true, 0.5)));
        assert_eq!(surface.next, Some((false, 1.0)));
    }

    #[test]
    fn test_next_renders_with_measured_width() {
        let mut carousel = setup(6, Some(250.0));
        assert!(carousel.next());
        assert_eq!(
            carousel.surface().transforms.last().map(String::as_str),
            Some("translateX(-258px)")
        );
    }

    #[test]
    fn test_fallback_width() {
        let mut carousel = setup(6, None);
        carousel.next();
        assert_eq!(
            carousel.surface().transforms.last().map(String::as_str),
            Some("translateX(-308px)")
        );

        let mut carousel = setup(6, Some(0.0));
        carousel.next();
        assert_eq!(
            carousel.surface().transforms.last().map(String::as_str),
            Some("translateX(-308px)")
        );
    }

    #[test]
    fn test_width_remeasured_each_render() {
        let mut carousel = setup(6, Some(250.0));
        carousel.next();
        carousel.surface.width = Some(100.0);
        carousel.next();
        assert_eq!(
            carousel.surface().transforms.last().map(String::as_str),
            Some("translateX(-216px)")
        );
    }

    #[test]
    fn test_each_move_renders_once() {
        let mut carousel = setup(6, Some(250.0));
        assert!(carousel.surface().transforms.is_empty());

        carousel.next();
        carousel.next();
        carousel.prev();
        assert_eq!(
            carousel.surface().transforms,
            vec!["translateX(-258px)", "translateX(-516px)", "translateX(-258px)"]
        );
    }

    #[test]
    fn test_blocked_move_does_not_render() {
        let mut carousel = setup(6, Some(250.0));
        assert!(!carousel.prev());
        assert!(carousel.surface().transforms.is_empty());
    }

    #[test]
    fn test_next_at_max_unchanged() {
        let mut carousel = setup(4, Some(250.0));
        assert!(carousel.next());
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.next());
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.surface().next, Some((true, 0.5)));
    }

    #[test]
    fn test_keyboard() {
        let mut carousel = setup(6, Some(250.0));
        assert!(carousel.handle_key("ArrowRight"));
        assert!(carousel.handle_key("ArrowRight"));
        assert!(carousel.handle_key("ArrowLeft"));
        assert!(!carousel.handle_key("Tab"));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_swipe_left_increments_by_one() {
        let mut carousel = setup(6, Some(250.0));
        carousel.touch_start(300.0);
        assert!(carousel.touch_end(200.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_short_swipe_no_change() {
        let mut carousel = setup(6, Some(250.0));
        carousel.touch_start(300.0);
        assert!(!carousel.touch_end(270.0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = setup(0, None);
        let frame = carousel.render();
        assert_eq!(frame.translate_x, 0.0);
        assert!(frame.prev_disabled && frame.next_disabled);
        assert!(!carousel.next());
        assert!(!carousel.handle_key("ArrowRight"));
    }
}
