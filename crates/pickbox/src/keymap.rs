//! Keyboard interpretation for the picker.
//!
//! [`interpret`] is a pure function from a key press plus the current
//! selection state to a [`KeyDisposition`]. It performs no mutation
//! itself; the widget applies the returned action to its
//! [`SelectionStore`](crate::state::SelectionStore) and sets the event's
//! accepted flag from the disposition. Keeping the mapping side-effect
//! free makes the whole key grammar testable without a widget.

use crate::events::{Key, KeyPressEvent};
use crate::model::OptionSet;
use crate::state::SelectionSnapshot;

/// A state transition requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Open the list, seeding the highlight.
    Open { focused: Option<usize> },
    /// Close the list without committing.
    Close,
    /// Commit the option at this index.
    Commit(usize),
    /// Move the highlight to this index.
    MoveFocus(usize),
    /// Consume the key without changing state.
    None,
}

/// Whether the widget consumes a key press or lets it propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The key belongs to the picker; apply the action and accept the event.
    Handled(KeyAction),
    /// The key is not ours; leave the event for the host.
    Propagate,
}

fn is_open_key(key: Key) -> bool {
    matches!(
        key,
        Key::Space | Key::Enter | Key::ArrowDown | Key::ArrowUp | Key::Home | Key::End
    )
}

fn is_commit_key(key: Key) -> bool {
    matches!(key, Key::Space | Key::Enter | Key::Tab)
}

/// Map a key press to a disposition given the current state.
///
/// The only key that ever propagates is an unmodified Tab while the list
/// is closed, so the widget participates in the host's tab order. Every
/// other key is consumed, whether or not it changes state.
pub fn interpret(
    event: &KeyPressEvent,
    snapshot: SelectionSnapshot,
    options: &OptionSet,
) -> KeyDisposition {
    if event.key == Key::Tab && !snapshot.open {
        return KeyDisposition::Propagate;
    }

    // Typeahead takes precedence over the rest of the grammar and works
    // in both states: jump to the first option starting with the typed
    // character, opening the list if needed. No match consumes the key
    // without effect.
    if let Some(ch) = event.typeahead_char() {
        return match options.find_prefix(ch) {
            Some(index) if snapshot.open => KeyDisposition::Handled(KeyAction::MoveFocus(index)),
            Some(index) => KeyDisposition::Handled(KeyAction::Open {
                focused: Some(index),
            }),
            None => KeyDisposition::Handled(KeyAction::None),
        };
    }

    if !snapshot.open {
        if !is_open_key(event.key) {
            return KeyDisposition::Handled(KeyAction::None);
        }
        let focused = match event.key {
            Key::Home if !options.is_empty() => Some(0),
            Key::Home => None,
            Key::End => options.last_index(),
            // Arrow opens with nothing selected seed the near end of the
            // list, so the next press starts stepping from a real option.
            Key::ArrowDown => snapshot
                .selected
                .or((!options.is_empty()).then_some(0)),
            Key::ArrowUp => snapshot.selected.or(options.last_index()),
            _ => snapshot.selected,
        };
        return KeyDisposition::Handled(KeyAction::Open { focused });
    }

    let action = match event.key {
        Key::Escape => KeyAction::Close,
        key if is_commit_key(key) => match snapshot.focused {
            Some(index) => KeyAction::Commit(index),
            // Nothing highlighted: close without committing.
            None => KeyAction::Close,
        },
        Key::ArrowDown => match next_down(snapshot, options) {
            Some(index) => KeyAction::MoveFocus(index),
            None => KeyAction::None,
        },
        Key::ArrowUp => match next_up(snapshot, options) {
            Some(index) => KeyAction::MoveFocus(index),
            None => KeyAction::None,
        },
        Key::Home if !options.is_empty() => KeyAction::MoveFocus(0),
        Key::End => match options.last_index() {
            Some(index) => KeyAction::MoveFocus(index),
            None => KeyAction::None,
        },
        _ => KeyAction::None,
    };
    KeyDisposition::Handled(action)
}

/// Next highlight for ArrowDown: one past the highlight, wrapping to the
/// top. With no highlight, step from the committed selection; with
/// neither, start at the top.
fn next_down(snapshot: SelectionSnapshot, options: &OptionSet) -> Option<usize> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let base = snapshot.focused.or(snapshot.selected);
    Some(match base {
        Some(index) => (index + 1) % len,
        None => 0,
    })
}

/// Next highlight for ArrowUp, the mirror of [`next_down`]: step toward
/// the top, wrapping to the bottom, starting from the bottom when
/// nothing is highlighted or selected.
fn next_up(snapshot: SelectionSnapshot, options: &OptionSet) -> Option<usize> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let base = snapshot.focused.or(snapshot.selected);
    Some(match base {
        Some(0) | None => len - 1,
        Some(index) => index - 1,
    })
}
