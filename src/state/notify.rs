//! Notification Slot - Single transient toast
//!
//! At most one toast exists. Its lifecycle:
//!
//! ```text
//! show() ──10ms──▶ Visible ──3000ms──▶ Leaving ──300ms──▶ Removed
//! ```
//!
//! A second `show()` replaces the current toast outright. The adapter tears
//! down the old node and cancels its timers; any timer that still fires for
//! the old id is rejected by `advance()`.

use crate::types::{ACCENT, ACCENT_END, ERROR_END, ERROR_START, Gradient};

// =============================================================================
// TIMING
// =============================================================================

/// Delay before the enter transition starts.
pub const ENTER_DELAY_MS: u32 = 10;

/// How long a toast stays fully visible.
pub const DISPLAY_MS: u32 = 3000;

/// Length of the exit transition before the node is removed.
pub const EXIT_MS: u32 = 300;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

impl NoticeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    /// `notification notification-{kind}`
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub const fn gradient(&self) -> Gradient {
        match self {
            NoticeKind::Success => Gradient::new(ACCENT, ACCENT_END),
            NoticeKind::Error => Gradient::new(ERROR_START, ERROR_END),
        }
    }
}

/// Lifecycle phase of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Inserted, off to the right and transparent.
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl NoticePhase {
    pub const fn opacity(&self) -> &'static str {
        match self {
            NoticePhase::Visible => "1",
            _ => "0",
        }
    }

    pub const fn transform(&self) -> &'static str {
        match self {
            NoticePhase::Visible => "translateX(0)",
            _ => "translateX(100px)",
        }
    }

    /// The next phase and the delay before entering it.
    pub const fn next(&self) -> Option<(NoticePhase, u32)> {
        match self {
            NoticePhase::Entering => Some((NoticePhase::Visible, ENTER_DELAY_MS)),
            NoticePhase::Visible => Some((NoticePhase::Leaving, DISPLAY_MS)),
            NoticePhase::Leaving => Some((NoticePhase::Removed, EXIT_MS)),
            NoticePhase::Removed => None,
        }
    }
}

pub type NoticeId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
}

/// Fixed styles applied to every toast node.
pub const BASE_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("padding", "1rem 2rem"),
    ("border-radius", "12px"),
    ("color", "#fff"),
    ("font-weight", "600"),
    ("z-index", "10000"),
    ("transition", "all 0.3s ease"),
    ("box-shadow", "0 10px 30px rgba(0, 0, 0, 0.3)"),
];

// =============================================================================
// NOTICE SLOT
// =============================================================================

/// Result of `show()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub notice: Notice,
    /// The toast that was displaced, if any.
    pub replaced: Option<NoticeId>,
}

#[derive(Debug, Default)]
pub struct NoticeSlot {
    current: Option<(Notice, NoticePhase)>,
    next_id: NoticeId,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn phase(&self) -> Option<NoticePhase> {
        self.current.as_ref().map(|(_, phase)| *phase)
    }

    /// Put a new toast in the slot, displacing any current one.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> Shown {
        let id = self.next_id;
        self.next_id += 1;

        let notice = Notice {
            id,
            message: message.into(),
            kind,
        };
        let replaced = self
            .current
            .replace((notice.clone(), NoticePhase::Entering))
            .map(|(old, _)| old.id);

        Shown { notice, replaced }
    }

    /// Move toast `id` to its next phase.
    ///
    /// Returns the new phase, or `None` if `id` is no longer current.
    /// Reaching `Removed` empties the slot.
    pub fn advance(&mut self, id: NoticeId) -> Option<NoticePhase> {
        let (notice, phase) = self.current.as_mut()?;
        if notice.id != id {
            return None;
        }
        let (next, _) = phase.next()?;
        *phase = next;
        if next == NoticePhase::Removed {
            self.current = None;
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let mut slot = NoticeSlot::new();
        let shown = slot.show("Thanks!", NoticeKind::Success);
        assert_eq!(shown.replaced, None);
        assert_eq!(slot.phase(), Some(NoticePhase::Entering));

        let id = shown.notice.id;
        assert_eq!(slot.advance(id), Some(NoticePhase::Visible));
        assert_eq!(slot.advance(id), Some(NoticePhase::Leaving));
        assert_eq!(slot.advance(id), Some(NoticePhase::Removed));
        assert!(slot.current().is_none());
        assert_eq!(slot.advance(id), None);
    }

    #[test]
    fn test_show_replaces_current() {
        let mut slot = NoticeSlot::new();
        let first = slot.show("one", NoticeKind::Success);
        slot.advance(first.notice.id);

        let second = slot.show("two", NoticeKind::Error);
        assert_eq!(second.replaced, Some(first.notice.id));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("two"));
        assert_eq!(slot.phase(), Some(NoticePhase::Entering));
    }

    #[test]
    fn test_stale_timer_ignored() {
        let mut slot = NoticeSlot::new();
        let first = slot.show("one", NoticeKind::Success);
        let second = slot.show("two", NoticeKind::Success);

        // Old timers firing late must not touch the new toast
        assert_eq!(slot.advance(first.notice.id), None);
        assert_eq!(slot.advance(first.notice.id), None);
        assert_eq!(slot.phase(), Some(NoticePhase::Entering));

        assert_eq!(slot.advance(second.notice.id), Some(NoticePhase::Visible));
    }

    #[test]
    fn test_phase_timings() {
        assert_eq!(NoticePhase::Entering.next(), Some((NoticePhase::Visible, 10)));
        assert_eq!(NoticePhase::Visible.next(), Some((NoticePhase::Leaving, 3000)));
        assert_eq!(NoticePhase::Leaving.next(), Some((NoticePhase::Removed, 300)));
        assert_eq!(NoticePhase::Removed.next(), None);
    }

    #[test]
    fn test_phase_styles() {
        assert_eq!(NoticePhase::Entering.opacity(), "0");
        assert_eq!(NoticePhase::Visible.opacity(), "1");
        assert_eq!(NoticePhase::Visible.transform(), "translateX(0)");
        assert_eq!(NoticePhase::Leaving.transform(), "translateX(100px)");
    }

    #[test]
    fn test_kind_presentation() {
        assert_eq!(NoticeKind::Error.class_name(), "notification notification-error");
        assert_eq!(
            NoticeKind::Success.gradient().to_css(),
            "linear-gradient(135deg, #B717DB 0%, #D127AE 100%)"
        );
        assert_eq!(
            NoticeKind::Error.gradient().to_css(),
            "linear-gradient(135deg, #FF6B6B 0%, #EE5A6F 100%)"
        );
    }
}
