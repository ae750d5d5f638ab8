//! One-shot intersection watchers: reveal-on-scroll and lazy images.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{query_all, JsResultExt};
use crate::config::RevealConfig;
use crate::state::reveal::{IntersectionSample, RevealOutcome, RevealRegistry};

/// Attribute holding the reveal registry key.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
/// Attribute holding the lazy-image registry key.
pub const LAZY_KEY_ATTR: &str = "data-lazy-key";

/// A live observer and the registry behind it.
pub struct Watcher {
    registry: Rc<RefCell<RevealRegistry>>,
    // Held so the observer outlives `mount`.
    _observer: IntersectionObserver,
}

impl Watcher {
    pub fn revealed_count(&self) -> usize {
        self.registry.borrow().revealed_count()
    }

    pub fn watching_count(&self) -> usize {
        self.registry.borrow().watching_count()
    }
}

/// Watch every element matching `selector` until it first qualifies, then
/// call `on_reveal` and stop observing it.
///
/// Returns `None` if nothing matches or the browser has no
/// `IntersectionObserver`.
pub fn watch_once(
    document: &Document,
    selector: &str,
    key_attr: &'static str,
    threshold: f64,
    root_margin: Option<&str>,
    on_reveal: impl Fn(&Element) + 'static,
) -> Option<Watcher> {
    let elements = query_all(document, selector);
    if elements.is_empty() {
        debug!(target: "landing::observe", selector, "nothing to watch");
        return None;
    }

    let registry = Rc::new(RefCell::new(RevealRegistry::new(threshold)));
    let callback_registry = Rc::clone(&registry);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(key_attr)
                    .and_then(|key| key.parse().ok())
                else {
                    continue;
                };
                let outcome = callback_registry.borrow_mut().observe(IntersectionSample {
                    key,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
                if outcome == RevealOutcome::Reveal {
                    on_reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .or_warn("IntersectionObserver")?;
    callback.forget();

    for element in &elements {
        let key = registry.borrow_mut().watch();
        element
            .set_attribute(key_attr, &key.to_string())
            .or_warn(key_attr);
        observer.observe(element);
    }
    info!(target: "landing::observe", selector, count = elements.len(), "watching");

    Some(Watcher {
        registry,
        _observer: observer,
    })
}

/// `[data-aos]` elements gain `aos-animate` once 10% visible.
pub fn watch_reveals(document: &Document, config: &RevealConfig) -> Option<Watcher> {
    watch_once(
        document,
        "[data-aos]",
        REVEAL_KEY_ATTR,
        config.threshold,
        Some(&config.root_margin()),
        |el| {
            el.class_list().add_1("aos-animate").or_warn("aos-animate");
        },
    )
}

/// `img[data-src]` elements load their source on first intersection.
pub fn watch_lazy_images(document: &Document) -> Option<Watcher> {
    watch_once(document, "img[data-src]", LAZY_KEY_ATTR, 0.0, None, |el| {
        let Some(src) = el.get_attribute("data-src") else {
            return;
        };
        match el.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(&src),
            None => {
                el.set_attribute("src", &src).or_warn("src");
            }
        }
        el.remove_attribute("data-src").or_warn("data-src");
    })
}
