//! Browser adapters.
//!
//! Implements the pipeline's surface traits on top of `web-sys` and wires
//! every listener in [`mount`]. The page may omit any section; each adapter
//! looks its elements up once and quietly does nothing if they are absent.

pub mod decor;
pub mod frame;
pub mod mount;
pub mod observe;
pub mod restore;
pub mod surfaces;
pub mod toast;

pub use mount::{mount, MountHandle};

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

use crate::error::LandingError;

// =============================================================================
// Result helpers
// =============================================================================

/// Log-and-drop for JavaScript call results.
pub(crate) trait JsResultExt<T> {
    fn or_warn(self, what: &str) -> Option<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn or_warn(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let err = LandingError::from(err);
                warn!(target: "landing::dom", what, %err, "DOM call failed");
                None
            }
        }
    }
}

// =============================================================================
// Queries
// =============================================================================

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    let found = document.query_selector(selector).or_warn(selector).flatten();
    if found.is_none() {
        debug!(target: "landing::dom", selector, "element not on page");
    }
    found
}

/// First element matching `selector`, as an `HtmlElement` (or subtype).
pub(crate) fn query_as<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    query(document, selector).and_then(|el| el.dyn_into::<T>().ok())
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Some(list) = document.query_selector_all(selector).or_warn(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// =============================================================================
// Style
// =============================================================================

pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).or_warn(property);
}

pub(crate) fn clear_style(el: &HtmlElement, property: &str) {
    el.style().remove_property(property).or_warn(property);
}

pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    el.class_list().toggle_with_force(class, on).or_warn(class);
}

// =============================================================================
// Events
// =============================================================================

/// Attach a listener for the page's lifetime. Events that are not `E` are
/// skipped.
pub(crate) fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .or_warn(event);
    closure.forget();
}

/// Like [`listen`], registered as passive.
pub(crate) fn listen_passive(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| handler());
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .or_warn(event);
    closure.forget();
}

/// Run `f` once the DOM is parsed: immediately if it already is.
pub(crate) fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .or_warn("DOMContentLoaded");
}
