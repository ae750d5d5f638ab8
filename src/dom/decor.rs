//! Ripples, floating orbs, focus outlines.

use tracing::debug;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use super::{clear_style, listen, query_all, query_as, set_style, JsResultExt};
use crate::state::decor::{
    focus_outline, Orb, Ripple, FOCUS_OUTLINE_OFFSET, ORB_STYLESHEET, RIPPLE_LIFETIME_MS,
    RIPPLE_STYLESHEET,
};
use crate::types::Rect;

/// Append a `<style>` element to `<head>`.
pub fn inject_stylesheet(document: &Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    let Some(style) = document.create_element("style").or_warn("createElement") else {
        return;
    };
    style.set_text_content(Some(css));
    head.append_child(&style).or_warn("appendChild");
}

fn bounding_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Click ripple on every `.btn-primary`. Returns how many buttons were wired.
pub fn install_ripples(document: &Document) -> usize {
    let buttons = query_all(document, ".btn-primary");
    if buttons.is_empty() {
        return 0;
    }
    inject_stylesheet(document, RIPPLE_STYLESHEET);

    for button in &buttons {
        let document = document.clone();
        let target = button.clone();
        listen(button, "click", move |event: MouseEvent| {
            let ripple = Ripple::at(
                bounding_rect(&target),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            let Some(span) = document
                .create_element("span")
                .or_warn("createElement")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            for (property, value) in ripple.styles() {
                set_style(&span, property, &value);
            }
            span.set_class_name("ripple");
            target.append_child(&span).or_warn("appendChild");
            Timeout::new(RIPPLE_LIFETIME_MS, move || span.remove()).forget();
        });
    }
    buttons.len()
}

/// Scatter `count` orbs over the hero background.
pub fn spawn_orbs(document: &Document, count: usize) -> usize {
    let Some(hero) = query_as::<HtmlElement>(document, ".hero-background") else {
        return 0;
    };
    inject_stylesheet(document, ORB_STYLESHEET);

    let mut spawned = 0;
    for _ in 0..count {
        let orb = Orb::sample(js_sys::Math::random);
        let Some(node) = document.create_element("div").or_warn("createElement") else {
            continue;
        };
        node.set_class_name("floating-orb");
        node.set_attribute("style", &orb.css_text()).or_warn("style");
        if hero.append_child(&node).or_warn("appendChild").is_some() {
            spawned += 1;
        }
    }
    debug!(target: "landing::decor", spawned, "orbs placed");
    spawned
}

/// Accent outline on focus for every link and button, cleared on blur.
pub fn install_focus_outlines(document: &Document) {
    let outline = focus_outline();
    for el in query_all(document, "a, button") {
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = el.clone();
        let value = outline.clone();
        listen(&el, "focus", move |_: Event| {
            set_style(&target, "outline", &value);
            set_style(&target, "outline-offset", FOCUS_OUTLINE_OFFSET);
        });
        let target = el.clone();
        listen(&el, "blur", move |_: Event| {
            clear_style(&target, "outline");
            clear_style(&target, "outline-offset");
        });
    }
}
