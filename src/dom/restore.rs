//! Always start at the top of the page.
//!
//! Browser scroll restoration is switched to manual. The page is scrolled to
//! the top before unload, on DOM ready, and again on `load`, after late
//! layout may have moved it.

use web_sys::{Document, Event, ScrollRestoration, Window};

use super::{listen, on_dom_ready, JsResultExt};

fn scroll_to_top(window: &Window) {
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn install(window: &Window, document: &Document) {
    if let Some(history) = window.history().or_warn("history") {
        history
            .set_scroll_restoration(ScrollRestoration::Manual)
            .or_warn("scrollRestoration");
    }

    let win = window.clone();
    listen(window, "beforeunload", move |_: Event| scroll_to_top(&win));

    let win = window.clone();
    let doc = document.clone();
    listen(window, "load", move |_: Event| {
        scroll_to_top(&win);
        if let Some(root) = doc.document_element() {
            root.set_scroll_top(0);
        }
        if let Some(body) = doc.body() {
            body.set_scroll_top(0);
        }
    });

    let win = window.clone();
    on_dom_ready(document, move || scroll_to_top(&win));
}
