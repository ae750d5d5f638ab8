//! `requestAnimationFrame` adapter.

use std::cell::OnceCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::JsResultExt;
use crate::pipeline::frame::{FrameHandle, FrameScheduler};

/// Frame scheduler bound to one long-lived callback.
///
/// Clones share the callback, so a callback can hold a clone of its own
/// scheduler to request the next frame.
#[derive(Clone)]
pub struct RafScheduler {
    window: Window,
    callback: Rc<OnceCell<Function>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(OnceCell::new()),
        }
    }

    /// Install the frame callback. Only the first call takes effect.
    pub fn bind(&self, mut on_frame: impl FnMut(f64) + 'static) {
        let closure = Closure::<dyn FnMut(f64)>::new(move |now: f64| on_frame(now));
        let function: Function = closure.as_ref().unchecked_ref::<Function>().clone();
        if self.callback.set(function).is_ok() {
            closure.forget();
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.callback.get()?;
        self.window
            .request_animation_frame(callback)
            .or_warn("requestAnimationFrame")
            .map(FrameHandle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.window
            .cancel_animation_frame(handle.0)
            .or_warn("cancelAnimationFrame");
    }
}
