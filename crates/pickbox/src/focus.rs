//! Input focus coordination.
//!
//! The picker does not own a platform focus system; the embedding view
//! does. [`FocusHost`] is the seam the view implements to actually move
//! platform focus, and [`FocusCoordinator`] decides *when* focus must
//! move so the widget never strands it:
//!
//! - On mount, an auto-focusing enabled widget claims focus.
//! - After a commit, focus returns to the control so the next key press
//!   keeps working the picker.
//! - After a clear, focus returns to the control, because the clear
//!   affordance that held it disappears with the selection.

use pickbox_core::logging::targets;

use crate::events::FocusReason;

/// A focusable part of the widget, as reported by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The combobox control itself.
    Control,
    /// The clear affordance.
    Clear,
    /// An option row in the open list.
    Option(usize),
}

/// Implemented by the embedding view to move platform focus.
///
/// The coordinator only ever asks for the control; options and the clear
/// affordance receive focus through the platform's own navigation, which
/// the view reports back via [`FocusCoordinator::note_focus`].
pub trait FocusHost {
    /// Give platform focus to the combobox control.
    fn focus_control(&mut self);
}

/// Tracks which part of the widget holds focus and requests the focus
/// moves the widget's transitions require.
#[derive(Debug, Default)]
pub struct FocusCoordinator {
    current: Option<FocusTarget>,
}

impl FocusCoordinator {
    /// Create a coordinator with nothing focused.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The part currently holding focus, if the widget has it at all.
    #[inline]
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    /// Whether any part of the widget holds focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.current.is_some()
    }

    /// Record a focus change reported by the view.
    pub fn note_focus(&mut self, target: FocusTarget, reason: FocusReason) {
        tracing::trace!(target: targets::FOCUS, ?target, ?reason, "focus gained");
        self.current = Some(target);
    }

    /// Record that focus left the widget entirely.
    pub fn note_blur(&mut self, reason: FocusReason) {
        tracing::trace!(target: targets::FOCUS, ?reason, "focus lost");
        self.current = None;
    }

    /// Claim focus for the control on mount.
    ///
    /// A disabled widget never auto-focuses. Returns `true` if focus was
    /// requested.
    pub fn on_mount<H: FocusHost>(&mut self, host: &mut H, auto_focus: bool, disabled: bool) -> bool {
        if !auto_focus || disabled {
            return false;
        }
        tracing::debug!(target: targets::FOCUS, "auto-focusing control on mount");
        host.focus_control();
        self.current = Some(FocusTarget::Control);
        true
    }

    /// Return focus to the control after a commit or a clear.
    pub fn refocus_control<H: FocusHost>(&mut self, host: &mut H) {
        tracing::trace!(target: targets::FOCUS, "refocusing control");
        host.focus_control();
        self.current = Some(FocusTarget::Control);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        control_focus_requests: usize,
    }

    impl FocusHost for CountingHost {
        fn focus_control(&mut self) {
            self.control_focus_requests += 1;
        }
    }

    #[test]
    fn test_mount_with_auto_focus() {
        let mut host = CountingHost::default();
        let mut coordinator = FocusCoordinator::new();
        assert!(coordinator.on_mount(&mut host, true, false));
        assert_eq!(host.control_focus_requests, 1);
        assert_eq!(coordinator.current(), Some(FocusTarget::Control));
    }

    #[test]
    fn test_mount_without_auto_focus_or_while_disabled() {
        let mut host = CountingHost::default();
        let mut coordinator = FocusCoordinator::new();
        assert!(!coordinator.on_mount(&mut host, false, false));
        assert!(!coordinator.on_mount(&mut host, true, true));
        assert_eq!(host.control_focus_requests, 0);
        assert!(!coordinator.has_focus());
    }

    #[test]
    fn test_refocus_after_leaving_clear_affordance() {
        let mut host = CountingHost::default();
        let mut coordinator = FocusCoordinator::new();
        coordinator.note_focus(FocusTarget::Clear, FocusReason::Pointer);
        coordinator.refocus_control(&mut host);
        assert_eq!(host.control_focus_requests, 1);
        assert_eq!(coordinator.current(), Some(FocusTarget::Control));
    }

    #[test]
    fn test_blur_clears_tracking() {
        let mut coordinator = FocusCoordinator::new();
        coordinator.note_focus(FocusTarget::Option(2), FocusReason::Other);
        assert!(coordinator.has_focus());
        coordinator.note_blur(FocusReason::Other);
        assert_eq!(coordinator.current(), None);
    }
}
