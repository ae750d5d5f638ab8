//! Frame scheduling.
//!
//! Animation-frame requests are modelled as cancellable tasks. A
//! `FrameGate` holds at most one pending handle, which is what coalesces a
//! burst of scroll events into a single update per frame.

/// Opaque id of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Source of animation frames (`requestAnimationFrame` in the browser).
///
/// The scheduler knows which callback to run; callers only request and
/// cancel.
pub trait FrameScheduler {
    /// Request the next frame. `None` if the environment refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously requested frame.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// At-most-one pending frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Option<FrameHandle>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Request a frame unless one is already pending.
    ///
    /// Returns `true` if a new frame was requested.
    pub fn request(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match scheduler.request_frame() {
            Some(handle) => {
                self.pending = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Mark the pending frame as delivered and release the gate.
    pub fn complete(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Cancel the pending frame, if any.
    pub fn cancel(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        match self.pending.take() {
            Some(handle) => {
                scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }
}
