//! Toast presenter.
//!
//! Drives one `NoticeSlot` with real timers and a real node. Showing a toast
//! while another is up removes the old node and cancels its pending timer
//! before the new one enters.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{set_style, JsResultExt};
use crate::pipeline::contact::Notifier;
use crate::state::notify::{
    NoticeId, NoticeKind, NoticePhase, NoticeSlot, BASE_STYLES, ENTER_DELAY_MS,
};

struct ToastPresenter {
    document: Document,
    slot: NoticeSlot,
    node: Option<HtmlElement>,
    /// Pending phase step. Dropping it clears the timer and frees its closure.
    timer: Option<Timeout>,
}

impl ToastPresenter {
    fn teardown(&mut self) {
        self.timer = None;
        if let Some(node) = self.node.take() {
            node.remove();
        }
    }

    fn build_node(&self, message: &str, kind: NoticeKind) -> Option<HtmlElement> {
        let node = self
            .document
            .create_element("div")
            .or_warn("createElement")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        node.set_class_name(&kind.class_name());
        node.set_text_content(Some(message));
        for (property, value) in BASE_STYLES {
            set_style(&node, property, value);
        }
        set_style(&node, "background", &kind.gradient().to_css());
        Self::style_phase(&node, NoticePhase::Entering);
        Some(node)
    }

    fn style_phase(node: &HtmlElement, phase: NoticePhase) {
        set_style(node, "opacity", phase.opacity());
        set_style(node, "transform", phase.transform());
    }
}

/// Shared handle to the page's single toast slot.
#[derive(Clone)]
pub struct Toasts(Rc<RefCell<ToastPresenter>>);

impl Toasts {
    pub fn new(document: Document) -> Self {
        Self(Rc::new(RefCell::new(ToastPresenter {
            document,
            slot: NoticeSlot::new(),
            node: None,
            timer: None,
        })))
    }

    /// Message of the toast on screen, if any.
    pub fn current_message(&self) -> Option<String> {
        self.0.borrow().slot.current().map(|notice| notice.message.clone())
    }

    pub fn show(&self, message: &str, kind: NoticeKind) {
        let id = {
            let mut presenter = self.0.borrow_mut();
            presenter.teardown();

            let shown = presenter.slot.show(message, kind);
            if let Some(replaced) = shown.replaced {
                debug!(target: "landing::toast", replaced, "toast superseded");
            }

            if let Some(node) = presenter.build_node(message, kind) {
                if let Some(body) = presenter.document.body() {
                    body.append_child(&node).or_warn("appendChild");
                }
                presenter.node = Some(node);
            }
            shown.notice.id
        };
        self.schedule(id, ENTER_DELAY_MS);
    }

    /// True while a phase step is waiting on a timer.
    pub fn has_pending_timer(&self) -> bool {
        self.0.borrow().timer.is_some()
    }

    fn schedule(&self, id: NoticeId, delay_ms: u32) {
        let handle = self.clone();
        let timer = Timeout::new(delay_ms, move || handle.advance(id));
        self.0.borrow_mut().timer = Some(timer);
    }

    fn advance(&self, id: NoticeId) {
        let next_delay = {
            let mut presenter = self.0.borrow_mut();
            presenter.timer = None;
            let Some(phase) = presenter.slot.advance(id) else {
                return;
            };
            match phase {
                NoticePhase::Removed => {
                    if let Some(node) = presenter.node.take() {
                        node.remove();
                    }
                    None
                }
                _ => {
                    if let Some(node) = &presenter.node {
                        ToastPresenter::style_phase(node, phase);
                    }
                    phase.next().map(|(_, delay)| delay)
                }
            }
        };
        if let Some(delay) = next_delay {
            self.schedule(id, delay);
        }
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str, kind: NoticeKind) {
        self.show(message, kind);
    }
}
