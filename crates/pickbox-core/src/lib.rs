//! Core systems for Pickbox.
//!
//! This crate provides the foundational components of the Pickbox widget
//! library:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Error Types**: The shared error/result vocabulary
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use pickbox_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod error;
pub mod logging;
pub mod signal;

pub use error::{PickboxError, Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
