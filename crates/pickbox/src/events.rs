//! Widget event types.
//!
//! This module defines the input events the picker engine consumes. The
//! engine is headless: the host's view adapter translates platform events
//! (DOM, winit, terminal, ...) into these types and feeds them to
//! [`SelectBox::event`](crate::SelectBox::event).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    ///
    /// For key events this also means the host must suppress the
    /// platform's default action (page scroll on arrows, and so on).
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard key codes.
///
/// This enum represents the logical keys the picker reacts to. It follows
/// a similar structure to web KeyboardEvent.code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    // Unknown/unmapped key
    Unknown(u16),
}

impl Key {
    /// Check if this is a letter key.
    pub fn is_letter(&self) -> bool {
        matches!(
            self,
            Key::A | Key::B | Key::C | Key::D | Key::E | Key::F | Key::G
                | Key::H | Key::I | Key::J | Key::K | Key::L | Key::M
                | Key::N | Key::O | Key::P | Key::Q | Key::R | Key::S
                | Key::T | Key::U | Key::V | Key::W | Key::X | Key::Y
                | Key::Z
        )
    }

    /// Check if this is a digit key (main keyboard).
    pub fn is_digit(&self) -> bool {
        matches!(
            self,
            Key::Digit0 | Key::Digit1 | Key::Digit2 | Key::Digit3 | Key::Digit4
                | Key::Digit5 | Key::Digit6 | Key::Digit7 | Key::Digit8 | Key::Digit9
        )
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
                | Key::Home | Key::End | Key::PageUp | Key::PageDown
        )
    }

    /// Convert this key to a lowercase ASCII character, if applicable.
    ///
    /// Returns `Some(char)` for letter keys (A-Z) and digit keys (0-9),
    /// `None` for other keys. Letters are returned in lowercase.
    pub fn to_ascii_char(&self) -> Option<char> {
        let ch = match self {
            Key::A => 'a',
            Key::B => 'b',
            Key::C => 'c',
            Key::D => 'd',
            Key::E => 'e',
            Key::F => 'f',
            Key::G => 'g',
            Key::H => 'h',
            Key::I => 'i',
            Key::J => 'j',
            Key::K => 'k',
            Key::L => 'l',
            Key::M => 'm',
            Key::N => 'n',
            Key::O => 'o',
            Key::P => 'p',
            Key::Q => 'q',
            Key::R => 'r',
            Key::S => 's',
            Key::T => 't',
            Key::U => 'u',
            Key::V => 'v',
            Key::W => 'w',
            Key::X => 'x',
            Key::Y => 'y',
            Key::Z => 'z',
            Key::Digit0 => '0',
            Key::Digit1 => '1',
            Key::Digit2 => '2',
            Key::Digit3 => '3',
            Key::Digit4 => '4',
            Key::Digit5 => '5',
            Key::Digit6 => '6',
            Key::Digit7 => '7',
            Key::Digit8 => '8',
            Key::Digit9 => '9',
            _ => return None,
        };
        Some(ch)
    }
}

/// Key press event, sent when a key is pressed while the control holds
/// input focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys this is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// Create a key press event with no text payload and no modifiers.
    pub fn from_key(key: Key) -> Self {
        let text = key.to_ascii_char().map(String::from).unwrap_or_default();
        Self::new(key, KeyboardModifiers::NONE, text, false)
    }

    /// The typeahead character produced by this press, if any.
    ///
    /// A press participates in typeahead when it produced exactly one text
    /// character and that character is a word character (ASCII alphanumeric
    /// or `_`). The character is returned lowercased.
    pub fn typeahead_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        (ch.is_ascii_alphanumeric() || ch == '_').then(|| ch.to_ascii_lowercase())
    }
}

/// Pointer press event, sent when a pointer button goes down on one of the
/// widget's parts.
///
/// Hit testing is the view adapter's job: it resolves the pointer position
/// to a [`SelectBoxPart`](crate::SelectBoxPart) before constructing this
/// event.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
}

impl PointerPressEvent {
    /// Create a new pointer press event for the primary button.
    pub fn primary() -> Self {
        Self {
            base: EventBase::new(),
            button: MouseButton::Left,
        }
    }

    /// Create a new pointer press event.
    pub fn new(button: MouseButton) -> Self {
        Self {
            base: EventBase::new(),
            button,
        }
    }
}

/// The reason input focus moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to a pointer press.
    Pointer,
    /// Focus changed due to Tab navigation.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus-in event, sent when the control gains input focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// Why focus moved.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus-in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus-out event, sent when the control loses input focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// Why focus moved.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus-out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typeahead_char_from_letter() {
        let event = KeyPressEvent::from_key(Key::B);
        assert_eq!(event.typeahead_char(), Some('b'));
    }

    #[test]
    fn test_typeahead_char_lowercases() {
        let event = KeyPressEvent::new(Key::B, KeyboardModifiers::SHIFT, "B", false);
        assert_eq!(event.typeahead_char(), Some('b'));
    }

    #[test]
    fn test_typeahead_char_rejects_non_word_text() {
        let space = KeyPressEvent::new(Key::Space, KeyboardModifiers::NONE, " ", false);
        assert_eq!(space.typeahead_char(), None);

        let empty = KeyPressEvent::new(Key::Enter, KeyboardModifiers::NONE, "", false);
        assert_eq!(empty.typeahead_char(), None);

        let multi = KeyPressEvent::new(Key::Unknown(0), KeyboardModifiers::NONE, "ab", false);
        assert_eq!(multi.typeahead_char(), None);
    }

    #[test]
    fn test_typeahead_char_accepts_digit_and_underscore() {
        let digit = KeyPressEvent::from_key(Key::Digit7);
        assert_eq!(digit.typeahead_char(), Some('7'));

        let underscore = KeyPressEvent::new(Key::Unknown(0), KeyboardModifiers::NONE, "_", false);
        assert_eq!(underscore.typeahead_char(), Some('_'));
    }

    #[test]
    fn test_key_classification() {
        assert!(Key::Q.is_letter());
        assert!(!Key::Digit3.is_letter());
        assert!(Key::Digit3.is_digit());
        assert!(Key::Home.is_navigation());
        assert!(!Key::Enter.is_navigation());
    }

    #[test]
    fn test_event_accept_ignore() {
        let mut base = EventBase::new();
        assert!(!base.is_accepted());
        base.accept();
        assert!(base.is_accepted());
        base.ignore();
        assert!(!base.is_accepted());
    }
}
