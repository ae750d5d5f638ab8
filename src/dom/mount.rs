//! Mount API - Wire the landing page.
//!
//! Builds every controller once, hands each its DOM surface, and attaches
//! the listeners that drive them. Closures share controllers through
//! `Rc<RefCell<_>>`; the returned [`MountHandle`] holds another reference
//! for inspection.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::dom;
//!
//! let handle = dom::mount()?;
//! assert_eq!(handle.carousel_index(), Some(0));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use web_sys::{Document, Element, Event, HtmlFormElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

use super::frame::RafScheduler;
use super::observe::{watch_lazy_images, watch_reveals, Watcher};
use super::surfaces::{
    carousel_item_count, viewport_metrics, DomCarouselSurface, DomFormSurface, DomScrollSurface,
};
use super::toast::Toasts;
use super::{decor, listen, listen_passive, on_dom_ready, query, query_all, query_as, restore, set_class};
use crate::config::{LandingConfig, CONFIG_ELEMENT_ID};
use crate::error::{LandingError, LandingResult};
use crate::logging::init_logging;
use crate::pipeline::carousel::CarouselController;
use crate::pipeline::contact::ContactFormController;
use crate::pipeline::navigator::{AnchorAction, SmoothScrollNavigator, DEMO_MESSAGE};
use crate::pipeline::scroll_effects::ScrollEffects;
use crate::state::navbar::{NavbarState, SharedNavbar};
use crate::state::notify::NoticeKind;

type SharedCarousel = Rc<RefCell<CarouselController<DomCarouselSurface>>>;
type SharedContact = Rc<RefCell<ContactFormController<DomFormSurface, Toasts>>>;

// =============================================================================
// Mount Handle
// =============================================================================

/// Live references to the mounted controllers.
///
/// Listeners stay attached for the page's lifetime whether or not the handle
/// is kept.
pub struct MountHandle {
    config: LandingConfig,
    navbar: SharedNavbar,
    scroll: Rc<RefCell<ScrollEffects<DomScrollSurface>>>,
    navigator: Rc<RefCell<SmoothScrollNavigator>>,
    carousel: Option<SharedCarousel>,
    contact: Option<SharedContact>,
    toasts: Toasts,
    reveals: Option<Watcher>,
    lazy_images: Option<Watcher>,
}

impl MountHandle {
    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn is_menu_open(&self) -> bool {
        self.navbar.get().is_menu_open()
    }

    pub fn is_navbar_scrolled(&self) -> bool {
        self.navbar.get().is_scrolled()
    }

    pub fn scroll_frames_run(&self) -> u64 {
        self.scroll.borrow().frames_run()
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.navigator.borrow().is_animating()
    }

    /// `None` if the page has no carousel.
    pub fn carousel_index(&self) -> Option<usize> {
        self.carousel
            .as_ref()
            .map(|carousel| carousel.borrow().current_index())
    }

    pub fn has_contact_form(&self) -> bool {
        self.contact.is_some()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals.as_ref().map_or(0, Watcher::revealed_count)
    }

    pub fn pending_lazy_images(&self) -> usize {
        self.lazy_images.as_ref().map_or(0, Watcher::watching_count)
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the landing page on the current document.
///
/// Sets up, in order:
/// 1. Config and logging
/// 2. Scroll restoration
/// 3. Navbar menu and the scroll-effects frame loop
/// 4. Anchor navigation and the demo notice
/// 5. Reveal-on-scroll and lazy images
/// 6. Carousel and contact form
/// 7. Ripples, orbs and focus outlines
///
/// Fails only when there is no window or document.
pub fn mount() -> LandingResult<MountHandle> {
    let window =
        web_sys::window().ok_or_else(|| LandingError::JavaScript("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| LandingError::JavaScript("window has no document".into()))?;

    let config = load_config(&document);

    restore::install(&window, &document);

    let navbar = NavbarState::shared(config.navbar_threshold);
    install_nav_menu(&document, &navbar);
    let scroll = install_scroll_effects(&window, &document, &config, &navbar);

    let toasts = Toasts::new(document.clone());
    let navigator = install_anchor_navigation(&window, &document, &config, &toasts);

    let reveals = watch_reveals(&document, &config.reveal);
    let lazy_images = watch_lazy_images(&document);

    let carousel = install_carousel(&document, &config);
    let contact = install_contact_form(&document, &toasts);

    decor::install_ripples(&document);
    decor::spawn_orbs(&document, config.orb_count);
    decor::install_focus_outlines(&document);

    let ready_doc = document.clone();
    let ready_carousel = carousel.clone();
    on_dom_ready(&document, move || {
        if let Some(body) = ready_doc.body() {
            set_class(&body, "loaded", true);
        }
        if let Some(carousel) = ready_carousel {
            carousel.borrow_mut().render();
        }
    });

    info!(
        target: "landing::mount",
        carousel = carousel.is_some(),
        contact_form = contact.is_some(),
        parallax_layers = config.parallax.len(),
        "landing page mounted"
    );

    Ok(MountHandle {
        config,
        navbar,
        scroll,
        navigator,
        carousel,
        contact,
        toasts,
        reveals,
        lazy_images,
    })
}

/// Read the embedded JSON config and start logging with its filter.
///
/// A parse failure is reported once logging is up.
fn load_config(document: &Document) -> LandingConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let (config, error) = LandingConfig::resolve(text.as_deref());

    init_logging(&config.log_filter);
    if let Some(err) = error {
        warn!(target: "landing::config", %err, "invalid page config, using defaults");
    }
    config
}

// =============================================================================
// Navbar
// =============================================================================

fn render_menu(toggle: &Element, links: Option<&Element>, open: bool) {
    set_class(toggle, "active", open);
    if let Some(links) = links {
        set_class(links, "active", open);
    }
}

fn install_nav_menu(document: &Document, navbar: &SharedNavbar) {
    let Some(toggle) = query(document, ".nav-toggle") else {
        return;
    };
    let links = query(document, ".nav-links");

    {
        let navbar = Rc::clone(navbar);
        let toggle_el = toggle.clone();
        let links = links.clone();
        listen(&toggle, "click", move |_: Event| {
            let mut state = navbar.get();
            let open = state.toggle_menu();
            navbar.set(state);
            render_menu(&toggle_el, links.as_ref(), open);
        });
    }

    for link in query_all(document, ".nav-links a") {
        let navbar = Rc::clone(navbar);
        let toggle = toggle.clone();
        let links = links.clone();
        listen(&link, "click", move |_: Event| {
            let mut state = navbar.get();
            if state.close_menu() {
                navbar.set(state);
            }
            render_menu(&toggle, links.as_ref(), false);
        });
    }
}

// =============================================================================
// Scroll effects
// =============================================================================

fn install_scroll_effects(
    window: &Window,
    document: &Document,
    config: &LandingConfig,
    navbar: &SharedNavbar,
) -> Rc<RefCell<ScrollEffects<DomScrollSurface>>> {
    let surface = DomScrollSurface::new(
        window.clone(),
        document.clone(),
        config.parallax.iter().map(|layer| layer.selector.as_str()),
    );
    let scroll = Rc::new(RefCell::new(ScrollEffects::new(
        surface,
        Rc::clone(navbar),
        config.parallax_layers(),
    )));

    let scheduler = RafScheduler::new(window.clone());
    let on_frame = Rc::clone(&scroll);
    scheduler.bind(move |_| on_frame.borrow_mut().run_frame());

    let on_scroll = Rc::clone(&scroll);
    let mut frames = scheduler.clone();
    listen_passive(window, "scroll", move || {
        on_scroll.borrow_mut().on_scroll(&mut frames);
    });

    scroll
}

// =============================================================================
// Anchors
// =============================================================================

fn install_anchor_navigation(
    window: &Window,
    document: &Document,
    config: &LandingConfig,
    toasts: &Toasts,
) -> Rc<RefCell<SmoothScrollNavigator>> {
    let navigator = Rc::new(RefCell::new(SmoothScrollNavigator::new(config.anchor_offset)));

    let scheduler = RafScheduler::new(window.clone());
    {
        let navigator = Rc::clone(&navigator);
        let mut frames = scheduler.clone();
        let window = window.clone();
        scheduler.bind(move |now| {
            let position = navigator.borrow_mut().on_frame(now, &mut frames);
            if let Some(y) = position {
                window.scroll_to_with_x_and_y(0.0, y);
            }
        });
    }

    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let navigator = Rc::clone(&navigator);
        let mut frames = scheduler.clone();
        let window = window.clone();
        let document = document.clone();
        let toasts = toasts.clone();
        let href_source = anchor.clone();
        listen(&anchor, "click", move |event: MouseEvent| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            match AnchorAction::classify(&href) {
                AnchorAction::Native => {}
                AnchorAction::Demo => {
                    event.prevent_default();
                    toasts.show(DEMO_MESSAGE, NoticeKind::Success);
                }
                AnchorAction::SmoothScroll(selector) => {
                    event.prevent_default();
                    let Some(target) = query(&document, selector) else {
                        return;
                    };
                    let Some(metrics) = viewport_metrics(&window, &document) else {
                        return;
                    };
                    let top = target.get_bounding_client_rect().top();
                    navigator.borrow_mut().start(metrics, top, &mut frames);
                }
            }
        });
    }

    navigator
}

// =============================================================================
// Carousel
// =============================================================================

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .item(0)
        .map(|touch| f64::from(touch.screen_x()))
}

fn install_carousel(document: &Document, config: &LandingConfig) -> Option<SharedCarousel> {
    let surface = DomCarouselSurface::new(document);
    let track = surface.track()?.clone();
    let prev = surface.prev_button().cloned();
    let next = surface.next_button().cloned();

    let carousel = Rc::new(RefCell::new(CarouselController::new(
        surface,
        carousel_item_count(document),
        &config.carousel,
    )));

    if let Some(prev) = prev {
        let carousel = Rc::clone(&carousel);
        listen(&prev, "click", move |_: Event| {
            carousel.borrow_mut().prev();
        });
    }
    if let Some(next) = next {
        let carousel = Rc::clone(&carousel);
        listen(&next, "click", move |_: Event| {
            carousel.borrow_mut().next();
        });
    }

    {
        let carousel = Rc::clone(&carousel);
        listen(document, "keydown", move |event: KeyboardEvent| {
            carousel.borrow_mut().handle_key(&event.key());
        });
    }

    {
        let carousel = Rc::clone(&carousel);
        listen(&track, "touchstart", move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                carousel.borrow_mut().touch_start(x);
            }
        });
    }
    {
        let carousel = Rc::clone(&carousel);
        listen(&track, "touchend", move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event) {
                carousel.borrow_mut().touch_end(x);
            }
        });
    }

    Some(carousel)
}

// =============================================================================
// Contact form
// =============================================================================

fn install_contact_form(document: &Document, toasts: &Toasts) -> Option<SharedContact> {
    let form = query_as::<HtmlFormElement>(document, "#contactForm")?;
    let contact = Rc::new(RefCell::new(ContactFormController::new(
        DomFormSurface::new(form.clone()),
        toasts.clone(),
    )));

    let on_submit = Rc::clone(&contact);
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        // A rejection is already on screen as a toast.
        on_submit.borrow_mut().submit().ok();
    });

    Some(contact)
}
