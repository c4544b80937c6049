//! Pickbox - a headless single-select picker engine.
//!
//! The crate provides [`SelectBox`], the state machine behind a
//! keyboard-accessible combobox: normalized sorted options, external
//! value reconciliation, the full open/highlight/commit key grammar
//! with typeahead, and an AccessKit tree for assistive technologies.
//! Rendering, layout, and hit testing belong to the embedding view.
//!
//! # Example
//!
//! ```
//! use pickbox::{Key, KeyPressEvent, SelectBox};
//! use pickbox::focus::FocusHost;
//!
//! struct View;
//! impl FocusHost for View {
//!     fn focus_control(&mut self) {}
//! }
//!
//! let mut select = SelectBox::new()
//!     .with_options(["Kiwi", "Apple", "banana"])
//!     .with_clearable(true);
//! select.changed.connect(|value| println!("picked {value}"));
//!
//! let mut view = View;
//! let mut event = KeyPressEvent::from_key(Key::ArrowDown);
//! select.handle_key_press(&mut event, &mut view);
//! assert!(select.is_open());
//! ```

#[cfg(feature = "accessibility")]
pub mod accessibility;
pub mod events;
pub mod focus;
pub mod keymap;
pub mod model;
pub mod select_box;
pub mod state;

pub use pickbox_core::{ConnectionGuard, ConnectionId, PickboxError, Result, Signal};

pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    MouseButton, PointerPressEvent,
};
pub use focus::{FocusCoordinator, FocusHost, FocusTarget};
pub use keymap::{KeyAction, KeyDisposition};
pub use model::OptionSet;
pub use select_box::{DEFAULT_PLACEHOLDER, SelectBox, SelectBoxPart};
pub use state::{SelectionSnapshot, SelectionStore};
