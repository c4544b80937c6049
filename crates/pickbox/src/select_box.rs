//! Single-select picker widget.
//!
//! [`SelectBox`] is the headless engine behind a combobox control: it
//! owns the selection state, interprets keyboard and pointer input, and
//! reports committed choices through its [`changed`](SelectBox::changed)
//! signal. Rendering and hit testing stay in the embedding view, which
//! resolves pointer positions to a [`SelectBoxPart`] before handing
//! events over.
//!
//! # Example
//!
//! ```
//! use pickbox::SelectBox;
//!
//! let mut select = SelectBox::new()
//!     .with_options(["Kiwi", "Apple", "banana"])
//!     .with_label("Fruit");
//!
//! select.changed.connect(|value| {
//!     println!("picked {value}");
//! });
//!
//! // Options are normalized and sorted: apple, banana, kiwi.
//! assert_eq!(select.display_text(), "Please choose an option");
//! ```

use pickbox_core::Signal;
use pickbox_core::logging::targets;

#[cfg(feature = "accessibility")]
use crate::accessibility::{self, AccessibleState};
use crate::events::{
    FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, MouseButton, PointerPressEvent,
};
use crate::focus::{FocusCoordinator, FocusHost, FocusTarget};
use crate::keymap::{self, KeyAction, KeyDisposition};
use crate::model::{self, OptionSet};
use crate::state::{SelectionSnapshot, SelectionStore};

/// Default placeholder shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Please choose an option";

/// The interactive parts of the widget, as resolved by the view's hit
/// testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectBoxPart {
    /// The control surface that toggles the list.
    Control,
    /// An option row in the open list.
    Option(usize),
    /// The clear affordance.
    Clear,
}

/// A single-select picker.
///
/// The widget never mutates the host's value. Committing an option emits
/// the normalized option text on [`changed`](Self::changed); the host
/// stores it and feeds it back through [`set_value`](Self::set_value),
/// which reconciles it against the option set. Clearing is the one
/// exception: it resets the local selection without emitting.
pub struct SelectBox {
    store: SelectionStore,
    placeholder: String,
    label: Option<String>,
    id: Option<String>,
    clearable: bool,
    disabled: bool,
    auto_focus: bool,
    focus: FocusCoordinator,

    /// Emitted exactly once per committed option, with the option's
    /// normalized text.
    pub changed: Signal<String>,
}

impl SelectBox {
    /// Create a picker with no options.
    pub fn new() -> Self {
        Self {
            store: SelectionStore::new(OptionSet::empty()),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            label: None,
            id: None,
            clearable: false,
            disabled: false,
            auto_focus: false,
            focus: FocusCoordinator::new(),
            changed: Signal::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the options using builder pattern.
    pub fn with_options(mut self, options: impl Into<OptionSet>) -> Self {
        self.store = SelectionStore::new(options.into());
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the hidden label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the widget identifier using builder pattern.
    ///
    /// The view uses it to correlate the control with its option-list
    /// region (element ids, `aria-controls`-style references).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Enable the clear affordance using builder pattern.
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Set the disabled state using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Request focus on mount using builder pattern.
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Set the external value using builder pattern.
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        self.set_value(value);
        self
    }

    // =========================================================================
    // Host-driven properties
    // =========================================================================

    /// Replace the option list.
    ///
    /// The list is normalized and sorted; the current external value is
    /// re-reconciled against the result. A list with unchanged content
    /// is a no-op.
    pub fn set_options(&mut self, raw: &[String]) {
        self.store.set_options(raw);
    }

    /// Reconcile the host's value against the option set.
    ///
    /// `None`, an empty string, or a value matching no option all leave
    /// nothing selected.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.store.reconcile_external_value(value);
    }

    /// Set the disabled state. Disabling an open widget closes its list.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.store.is_open() {
            self.store.close();
        }
    }

    /// Set whether the clear affordance may be shown.
    pub fn set_clearable(&mut self, clearable: bool) {
        self.clearable = clearable;
    }

    /// Set the placeholder shown while nothing is selected.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// The normalized option set.
    pub fn options(&self) -> &OptionSet {
        self.store.options()
    }

    /// The widget identifier, if configured.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The hidden label, if configured.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the option list is visible.
    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    /// Whether the widget ignores input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The committed option index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.store.selected()
    }

    /// The highlighted option index, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.store.focused()
    }

    /// The committed option's normalized text, if any.
    pub fn value(&self) -> Option<&str> {
        self.store.selected().and_then(|i| self.store.options().get(i))
    }

    /// The current selection state as a snapshot.
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.store.snapshot()
    }

    /// The signal emitted after every selection state transition.
    pub fn state_changed(&self) -> &Signal<SelectionSnapshot> {
        self.store.state_changed()
    }

    /// The focus coordinator, for views that report focus movement.
    pub fn focus(&mut self) -> &mut FocusCoordinator {
        &mut self.focus
    }

    /// The text shown in the control: the selected option, or the
    /// placeholder, with the first character uppercased.
    pub fn display_text(&self) -> String {
        match self.value() {
            Some(text) => model::display_text(text),
            None => model::display_text(&self.placeholder),
        }
    }

    /// Whether the placeholder should render as fading back in.
    ///
    /// True when nothing is selected but something was: the view uses
    /// this to distinguish a cleared control from a freshly mounted one.
    pub fn placeholder_fading(&self) -> bool {
        let snapshot = self.store.snapshot();
        snapshot.selected.is_none() && snapshot.previous_selected.is_some()
    }

    /// Whether the clear affordance should currently be shown.
    pub fn clear_affordance_visible(&self) -> bool {
        self.clearable && self.store.selected().is_some() && !self.disabled
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Report that the view has mounted the widget.
    ///
    /// Claims platform focus when `auto_focus` is set and the widget is
    /// enabled.
    pub fn mount<H: FocusHost>(&mut self, host: &mut H) {
        self.focus.on_mount(host, self.auto_focus, self.disabled);
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Handle a key press on the control.
    ///
    /// Returns `true` if the key was consumed. The only key that is ever
    /// left for the host is an unmodified Tab while the list is closed.
    pub fn handle_key_press<H: FocusHost>(
        &mut self,
        event: &mut KeyPressEvent,
        host: &mut H,
    ) -> bool {
        // A disabled widget still swallows its keys so the page
        // underneath does not react to them, but bare Tab keeps moving
        // focus along.
        if self.disabled {
            if event.key == Key::Tab {
                event.base.ignore();
                return false;
            }
            event.base.accept();
            return true;
        }

        let disposition = keymap::interpret(event, self.store.snapshot(), self.store.options());
        let action = match disposition {
            KeyDisposition::Propagate => {
                event.base.ignore();
                return false;
            }
            KeyDisposition::Handled(action) => action,
        };
        event.base.accept();
        tracing::trace!(target: targets::KEYMAP, key = ?event.key, ?action, "key handled");

        match action {
            KeyAction::Open { focused } => self.store.open_with_focus(focused),
            KeyAction::Close => self.store.close(),
            KeyAction::MoveFocus(index) => self.store.set_focused(index),
            KeyAction::Commit(index) => self.commit(index, host),
            KeyAction::None => {}
        }
        true
    }

    /// Handle a key press while the clear affordance holds focus.
    ///
    /// Enter and Space clear the selection; Tab propagates; everything
    /// else is consumed without effect.
    pub fn handle_clear_key_press<H: FocusHost>(
        &mut self,
        event: &mut KeyPressEvent,
        host: &mut H,
    ) -> bool {
        if event.key == Key::Tab {
            event.base.ignore();
            return false;
        }
        event.base.accept();
        if matches!(event.key, Key::Enter | Key::Space) {
            self.clear(host);
        }
        true
    }

    /// Handle a pointer press, already resolved to a part by the view's
    /// hit testing.
    pub fn handle_pointer_press<H: FocusHost>(
        &mut self,
        part: SelectBoxPart,
        event: &mut PointerPressEvent,
        host: &mut H,
    ) -> bool {
        if self.disabled || event.button != MouseButton::Left {
            event.base.ignore();
            return false;
        }
        event.base.accept();

        match part {
            SelectBoxPart::Control => {
                self.focus.note_focus(FocusTarget::Control, FocusReason::Pointer);
                self.store.toggle_open();
            }
            SelectBoxPart::Option(index) => {
                if self.store.is_open() && index < self.store.options().len() {
                    self.commit(index, host);
                } else {
                    event.base.ignore();
                    return false;
                }
            }
            SelectBoxPart::Clear => {
                if self.clear_affordance_visible() {
                    self.clear(host);
                } else {
                    event.base.ignore();
                    return false;
                }
            }
        }
        true
    }

    /// Handle the control gaining input focus.
    pub fn handle_focus_in(&mut self, event: &mut FocusInEvent) {
        event.base.accept();
        self.focus.note_focus(FocusTarget::Control, event.reason);
    }

    /// Handle focus leaving the widget entirely.
    ///
    /// An open list closes so it does not linger detached from focus.
    pub fn handle_focus_out(&mut self, event: &mut FocusOutEvent) {
        event.base.accept();
        self.focus.note_blur(event.reason);
        if self.store.is_open() {
            self.store.close();
        }
    }

    fn commit<H: FocusHost>(&mut self, index: usize, host: &mut H) {
        let text = self.store.commit(index);
        tracing::debug!(target: targets::STATE, %text, "selection committed");
        self.changed.emit(text);
        self.focus.refocus_control(host);
    }

    /// Clear the selection without emitting [`changed`](Self::changed),
    /// and return focus to the control. The affordance that held focus
    /// disappears with the selection.
    fn clear<H: FocusHost>(&mut self, host: &mut H) {
        self.store.clear();
        self.focus.refocus_control(host);
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// Build an AccessKit tree update reflecting the current state.
    #[cfg(feature = "accessibility")]
    pub fn accessibility_update(&self) -> accesskit::TreeUpdate {
        let value = self.display_text();
        accessibility::tree_update(&AccessibleState {
            snapshot: self.store.snapshot(),
            options: self.store.options(),
            label: self.label.as_deref(),
            placeholder: &self.placeholder,
            value: &value,
            disabled: self.disabled,
            clear_visible: self.clear_affordance_visible(),
        })
    }
}

impl Default for SelectBox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectBox")
            .field("store", &self.store)
            .field("placeholder", &self.placeholder)
            .field("clearable", &self.clearable)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
