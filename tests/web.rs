//! Browser tests for the DOM adapters.
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use spark_landing::dom::observe::{watch_lazy_images, watch_reveals, LAZY_KEY_ATTR};
use spark_landing::dom::surfaces::DomFormSurface;
use spark_landing::dom::toast::Toasts;
use spark_landing::dom::{decor, restore};
use spark_landing::pipeline::FormSurface;
use spark_landing::{NoticeKind, RevealConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, ScrollRestoration};

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================================
// HELPERS
// =============================================================================

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser")
}

fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").expect("create fixture");
    root.set_inner_html(html);
    doc.body()
        .expect("document has a body")
        .append_child(&root)
        .expect("attach fixture");
    root
}

fn count(selector: &str) -> u32 {
    document()
        .query_selector_all(selector)
        .expect("valid selector")
        .length()
}

fn by_selector<T: JsCast>(selector: &str) -> T {
    document()
        .query_selector(selector)
        .expect("valid selector")
        .expect("element present")
        .dyn_into::<T>()
        .expect("element type")
}

fn has_toast(message: &str) -> bool {
    let nodes = document()
        .query_selector_all(".notification")
        .expect("valid selector");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .any(|node| node.text_content().as_deref() == Some(message))
}

/// Pinned to the viewport's top-left corner, so observers see it at once.
const PINNED: &str = "position:fixed;top:0;left:0;width:40px;height:40px";

// =============================================================================
// TESTS
// =============================================================================

#[wasm_bindgen_test]
fn test_logging_installs_in_browser() {
    spark_landing::init_logging("debug");
    spark_landing::init_logging("landing::carousel=trace");
    tracing::info!(target: "landing::logging", "console subscriber live");
}

#[wasm_bindgen_test]
fn test_toast_replaces_previous() {
    let toasts = Toasts::new(document());
    let before = count(".notification");

    toasts.show("first", NoticeKind::Success);
    toasts.show("second", NoticeKind::Error);

    assert_eq!(count(".notification"), before + 1);
    assert_eq!(toasts.current_message().as_deref(), Some("second"));
    assert!(count(".notification-error") >= 1);
}

#[wasm_bindgen_test]
async fn test_replaced_toast_timer_is_cancelled() {
    let toasts = Toasts::new(document());
    toasts.show("toast lifecycle one", NoticeKind::Success);
    toasts.show("toast lifecycle two", NoticeKind::Success);
    assert!(!has_toast("toast lifecycle one"));
    assert!(has_toast("toast lifecycle two"));
    assert!(toasts.has_pending_timer());

    // Enter, display and exit all elapse
    TimeoutFuture::new(3_600).await;

    assert!(!has_toast("toast lifecycle two"));
    assert_eq!(toasts.current_message(), None);
    assert!(!toasts.has_pending_timer());
}

#[wasm_bindgen_test]
fn test_form_surface_reads_named_fields() {
    fixture(
        r#"<form id="surfaceForm">
             <input name="name" value="Ada">
             <input name="email" value="ada@example.com">
             <textarea name="message">Hello</textarea>
           </form>"#,
    );
    let form: HtmlFormElement = by_selector("#surfaceForm");
    let surface = DomFormSurface::new(form);

    let fields = surface.read();
    assert_eq!(fields.name.as_deref(), Some("Ada"));
    assert_eq!(fields.email.as_deref(), Some("ada@example.com"));
    assert_eq!(fields.message.as_deref(), Some("Hello"));
}

#[wasm_bindgen_test]
fn test_mount_wires_page() {
    fixture(
        r##"<nav class="navbar">
              <button class="nav-toggle">menu</button>
              <div class="nav-links"><a href="#contact">Contact</a></div>
            </nav>
            <div class="carousel">
              <button class="carousel-btn prev">prev</button>
              <div class="carousel-track">
                <div class="screenshot-item">1</div>
                <div class="screenshot-item">2</div>
                <div class="screenshot-item">3</div>
                <div class="screenshot-item">4</div>
                <div class="screenshot-item">5</div>
              </div>
              <button class="carousel-btn next">next</button>
            </div>
            <section id="contact">
              <form id="contactForm">
                <input name="name"><input name="email"><textarea name="message"></textarea>
              </form>
            </section>"##,
    );

    let handle = spark_landing::mount().expect("mounted");
    assert!(handle.has_contact_form());

    // DOM is parsed, so the ready hook ran during mount
    let body = document().body().expect("body");
    assert!(body.class_list().contains("loaded"));

    // Carousel starts at the first page with prev disabled
    assert_eq!(handle.carousel_index(), Some(0));
    let next: HtmlElement = by_selector(".carousel-btn.next");
    next.click();
    assert_eq!(handle.carousel_index(), Some(1));
    let track: HtmlElement = by_selector(".carousel-track");
    let transform = track
        .style()
        .get_property_value("transform")
        .expect("style readable");
    assert!(transform.starts_with("translateX(-"));

    // Menu toggle flips both elements
    let toggle: HtmlElement = by_selector(".nav-toggle");
    toggle.click();
    assert!(handle.is_menu_open());
    assert!(toggle.class_list().contains("active"));

    // Nav link closes it again
    let link: HtmlElement = by_selector(".nav-links a");
    link.click();
    assert!(!handle.is_menu_open());
    assert!(!toggle.class_list().contains("active"));

    // Empty form submit shows the validation toast
    let form: HtmlFormElement = by_selector("#contactForm");
    form.request_submit().expect("submit dispatched");
    assert_eq!(
        handle.toasts().current_message().as_deref(),
        Some("Please fill in all fields")
    );
}

#[wasm_bindgen_test]
async fn test_reveal_marks_visible_element() {
    fixture(&format!(
        r#"<div id="revealTarget" data-aos="fade-up" style="{PINNED}">hi</div>"#
    ));
    let watcher = watch_reveals(&document(), &RevealConfig::default()).expect("watching");

    TimeoutFuture::new(200).await;

    let target: Element = by_selector("#revealTarget");
    assert!(target.class_list().contains("aos-animate"));
    assert!(watcher.revealed_count() >= 1);
}

#[wasm_bindgen_test]
async fn test_lazy_image_loads_source() {
    let src = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
    fixture(&format!(
        r#"<img id="lazyTarget" data-src="{src}" style="{PINNED}">"#
    ));
    let watcher = watch_lazy_images(&document()).expect("watching");

    let img: HtmlImageElement = by_selector("#lazyTarget");
    assert!(img.get_attribute(LAZY_KEY_ATTR).is_some());

    TimeoutFuture::new(200).await;

    assert_eq!(img.src(), src);
    assert!(img.get_attribute("data-src").is_none());
    assert_eq!(watcher.watching_count(), 0);
}

#[wasm_bindgen_test]
fn test_restore_starts_at_top() {
    let window = web_sys::window().expect("window");
    fixture(r#"<div style="height:5000px"></div>"#);
    window.scroll_to_with_x_and_y(0.0, 600.0);

    restore::install(&window, &document());

    let history = window.history().expect("history");
    assert_eq!(
        history.scroll_restoration().expect("readable"),
        ScrollRestoration::Manual
    );
    // DOM is already parsed, so the page went straight back up
    assert_eq!(window.scroll_y().expect("scroll position"), 0.0);
}

#[wasm_bindgen_test]
async fn test_ripple_removed_after_lifetime() {
    fixture(r#"<button id="rippleButton" class="btn-primary">Go</button>"#);
    assert!(decor::install_ripples(&document()) >= 1);

    let button: HtmlElement = by_selector("#rippleButton");
    button.click();
    assert!(button.query_selector(".ripple").expect("valid selector").is_some());

    TimeoutFuture::new(700).await;

    assert!(button.query_selector(".ripple").expect("valid selector").is_none());
}
