//! Selection state store.
//!
//! [`SelectionStore`] is the single source of truth for the picker's
//! `open`/`selected`/`focused` fields, reconciled against the host's
//! externally supplied value and the current [`OptionSet`]. Every mutating
//! operation is an atomic transition; subscribers are notified once per
//! transition with a [`SelectionSnapshot`] that already reflects it, and
//! the view layer re-derives its rendering purely from that snapshot.
//!
//! # Invariants
//!
//! - `selected` and `focused`, when set, are valid indices into the
//!   current option set.
//! - An empty option set forces both to `None`.
//! - `focused` is meaningful only while `open` and is cleared on close.

use pickbox_core::Signal;
use pickbox_core::logging::targets;

use crate::model::OptionSet;

/// An immutable snapshot of the selection state after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    /// Whether the option list is visible.
    pub open: bool,
    /// Index of the committed option, if any.
    pub selected: Option<usize>,
    /// Index of the option highlighted for keyboard interaction, if any.
    pub focused: Option<usize>,
    /// The value `selected` held before its most recent change.
    ///
    /// Presentation hint only: a clearing transition (`previous_selected`
    /// set, `selected` unset) is rendered differently from first mount.
    pub previous_selected: Option<usize>,
}

/// Holds and mutates the picker's selection state.
///
/// The store is exclusively owned by one widget instance. The host owns
/// the external value and raw option list and may overwrite them at any
/// time; the store reconciles on each such change rather than treating its
/// internal state as authoritative.
pub struct SelectionStore {
    options: OptionSet,
    open: bool,
    selected: Option<usize>,
    focused: Option<usize>,
    previous_selected: Option<usize>,
    /// Last external value the host supplied, kept so an options rebuild
    /// can re-reconcile it.
    external_value: Option<String>,
    /// Emitted once per state transition with the post-transition snapshot.
    state_changed: Signal<SelectionSnapshot>,
}

impl SelectionStore {
    /// Create a store over the given options with nothing selected.
    pub fn new(options: OptionSet) -> Self {
        Self {
            options,
            open: false,
            selected: None,
            focused: None,
            previous_selected: None,
            external_value: None,
            state_changed: Signal::new(),
        }
    }

    /// The current option set.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Whether the option list is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The committed option index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted option index, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The current state as a snapshot.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            open: self.open,
            selected: self.selected,
            focused: self.focused,
            previous_selected: self.previous_selected,
        }
    }

    /// The signal emitted after every state transition.
    pub fn state_changed(&self) -> &Signal<SelectionSnapshot> {
        &self.state_changed
    }

    fn notify(&self) {
        self.state_changed.emit(self.snapshot());
    }

    fn set_selected(&mut self, index: Option<usize>) -> bool {
        if self.selected == index {
            return false;
        }
        self.previous_selected = self.selected;
        self.selected = index;
        true
    }

    /// Replace the raw option list, rebuilding the option set if the
    /// content actually changed.
    ///
    /// After a rebuild the last external value is re-reconciled against
    /// the new set and a stale `focused` index is dropped. Returns `true`
    /// if a rebuild happened.
    pub fn set_options(&mut self, raw: &[String]) -> bool {
        if !self.options.rebuild_if_changed(raw) {
            return false;
        }

        let value = self.external_value.clone();
        let new_selected = value.as_deref().and_then(|v| self.options.find_exact(v));
        self.set_selected(new_selected);

        if let Some(f) = self.focused
            && f >= self.options.len()
        {
            self.focused = None;
        }

        tracing::debug!(
            target: targets::STATE,
            len = self.options.len(),
            selected = ?self.selected,
            "options rebuilt"
        );
        self.notify();
        true
    }

    /// Reconcile the externally supplied value.
    ///
    /// An absent or empty value deselects. Otherwise the value is
    /// normalized and searched for an exact match; no match also
    /// deselects. `open` and `focused` are left alone.
    pub fn reconcile_external_value(&mut self, value: Option<&str>) {
        self.external_value = value.map(str::to_owned);
        let new_selected = match value {
            None | Some("") => None,
            Some(v) => self.options.find_exact(v),
        };
        if self.set_selected(new_selected) {
            tracing::debug!(
                target: targets::STATE,
                selected = ?self.selected,
                "external value reconciled"
            );
            self.notify();
        }
    }

    /// Flip the open state without seeding a highlight.
    ///
    /// This is the pointer-click path: opening leaves `focused` unset.
    /// Closing clears `focused`.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            tracing::trace!(target: targets::STATE, "opened (no highlight)");
            self.notify();
        }
    }

    /// Open the list with an initial highlight.
    ///
    /// This is the keyboard path: `focused` is seeded from the caller
    /// (typically the committed selection, or a Home/End endpoint). An
    /// out-of-range or empty-set seed degrades to no highlight.
    pub fn open_with_focus(&mut self, focused: Option<usize>) {
        self.open = true;
        self.focused = focused.filter(|&i| i < self.options.len());
        tracing::trace!(target: targets::STATE, focused = ?self.focused, "opened via keyboard");
        self.notify();
    }

    /// Close the list and drop the highlight.
    pub fn close(&mut self) {
        self.open = false;
        self.focused = None;
        tracing::trace!(target: targets::STATE, "closed");
        self.notify();
    }

    /// Move the highlight while open.
    ///
    /// `index` must be a valid option index.
    pub fn set_focused(&mut self, index: usize) {
        assert!(
            index < self.options.len(),
            "focused index {index} out of range for {} options",
            self.options.len()
        );
        self.focused = Some(index);
        self.notify();
    }

    /// Commit an option: select it, close the list, drop the highlight.
    ///
    /// Returns the committed option's normalized text. `index` must be a
    /// valid option index; every call site derives it from the current
    /// option set, so an out-of-range index is a caller bug and fails fast.
    pub fn commit(&mut self, index: usize) -> String {
        assert!(
            index < self.options.len(),
            "commit index {index} out of range for {} options",
            self.options.len()
        );
        self.set_selected(Some(index));
        self.open = false;
        self.focused = None;
        tracing::debug!(target: targets::STATE, index, "committed");
        self.notify();
        self.options
            .get(index)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// Clear the committed selection and close the list.
    ///
    /// Clearing is a local reset: it is reported through the state
    /// snapshot channel only, never through the widget's change signal.
    pub fn clear(&mut self) {
        self.set_selected(None);
        self.open = false;
        self.focused = None;
        tracing::debug!(target: targets::STATE, "cleared");
        self.notify();
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("options", &self.options.len())
            .field("open", &self.open)
            .field("selected", &self.selected)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}
