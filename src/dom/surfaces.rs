//! DOM implementations of the pipeline surfaces.

use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, Window};

use super::{query, query_as, set_class, set_style, JsResultExt};
use crate::error::FormField;
use crate::pipeline::carousel::CarouselSurface;
use crate::pipeline::contact::FormSurface;
use crate::pipeline::scroll_effects::ScrollSurface;
use crate::state::form::ContactFields;
use crate::state::parallax::ParallaxTransform;
use crate::state::scroll::{progress_width, ViewportMetrics};

// =============================================================================
// Scroll
// =============================================================================

/// Reads the current scroll position and page size from the window.
pub(crate) fn viewport_metrics(window: &Window, document: &Document) -> Option<ViewportMetrics> {
    let scroll_top = window.scroll_y().or_warn("scrollY")?;
    let viewport_height = window.inner_height().or_warn("innerHeight")?.as_f64()?;
    let document_height = f64::from(document.document_element()?.scroll_height());
    Some(ViewportMetrics::new(scroll_top, viewport_height, document_height))
}

pub struct DomScrollSurface {
    window: Window,
    document: Document,
    progress_bar: Option<HtmlElement>,
    navbar: Option<Element>,
    layers: Vec<Option<HtmlElement>>,
}

impl DomScrollSurface {
    /// `layer_selectors` must line up with the layers given to
    /// `ScrollEffects`.
    pub fn new<'a>(
        window: Window,
        document: Document,
        layer_selectors: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let layers = layer_selectors
            .into_iter()
            .map(|selector| query_as::<HtmlElement>(&document, selector))
            .collect();
        Self {
            progress_bar: query_as(&document, "#scrollProgress .scroll-progress-bar"),
            navbar: query(&document, ".navbar"),
            layers,
            window,
            document,
        }
    }
}

impl ScrollSurface for DomScrollSurface {
    fn metrics(&self) -> Option<ViewportMetrics> {
        viewport_metrics(&self.window, &self.document)
    }

    fn set_progress(&mut self, percent: f64) {
        if let Some(bar) = &self.progress_bar {
            set_style(bar, "width", &progress_width(percent));
        }
    }

    fn set_navbar_scrolled(&mut self, scrolled: bool) {
        if let Some(navbar) = &self.navbar {
            set_class(navbar, "scrolled", scrolled);
        }
    }

    fn layer_top(&self, index: usize) -> Option<f64> {
        let layer = self.layers.get(index)?.as_ref()?;
        Some(layer.get_bounding_client_rect().top())
    }

    fn apply_parallax(&mut self, index: usize, transform: &ParallaxTransform) {
        let Some(Some(layer)) = self.layers.get(index) else {
            return;
        };
        set_style(layer, "transform", &transform.css());
        set_style(layer, "--parallax-y", &transform.custom_property());
    }
}

// =============================================================================
// Carousel
// =============================================================================

pub struct DomCarouselSurface {
    track: Option<HtmlElement>,
    first_item: Option<HtmlElement>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
}

impl DomCarouselSurface {
    pub fn new(document: &Document) -> Self {
        Self {
            track: query_as(document, ".carousel-track"),
            first_item: query_as(document, ".screenshot-item"),
            prev: query_as(document, ".carousel-btn.prev"),
            next: query_as(document, ".carousel-btn.next"),
        }
    }

    pub fn track(&self) -> Option<&HtmlElement> {
        self.track.as_ref()
    }

    pub fn prev_button(&self) -> Option<&HtmlButtonElement> {
        self.prev.as_ref()
    }

    pub fn next_button(&self) -> Option<&HtmlButtonElement> {
        self.next.as_ref()
    }

    fn style_button(button: &Option<HtmlButtonElement>, disabled: bool, opacity: f64) {
        if let Some(button) = button {
            button.set_disabled(disabled);
            set_style(button, "opacity", &opacity.to_string());
        }
    }
}

impl CarouselSurface for DomCarouselSurface {
    fn item_width(&self) -> Option<f64> {
        self.first_item
            .as_ref()
            .map(|item| f64::from(item.offset_width()))
    }

    fn set_track_transform(&mut self, transform: &str) {
        if let Some(track) = &self.track {
            set_style(track, "transform", transform);
        }
    }

    fn set_prev_button(&mut self, disabled: bool, opacity: f64) {
        Self::style_button(&self.prev, disabled, opacity);
    }

    fn set_next_button(&mut self, disabled: bool, opacity: f64) {
        Self::style_button(&self.next, disabled, opacity);
    }
}

/// Number of `.screenshot-item` elements on the page.
pub(crate) fn carousel_item_count(document: &Document) -> usize {
    document
        .query_selector_all(".screenshot-item")
        .or_warn(".screenshot-item")
        .map_or(0, |items| items.length() as usize)
}

// =============================================================================
// Contact form
// =============================================================================

pub struct DomFormSurface {
    form: HtmlFormElement,
}

impl DomFormSurface {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl FormSurface for DomFormSurface {
    fn read(&self) -> ContactFields {
        let Some(data) = FormData::new_with_form(&self.form).or_warn("FormData") else {
            return ContactFields::default();
        };
        let field = |field: FormField| data.get(field.as_str()).as_string();
        ContactFields {
            name: field(FormField::Name),
            email: field(FormField::Email),
            message: field(FormField::Message),
        }
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

