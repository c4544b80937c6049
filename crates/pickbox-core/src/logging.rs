//! Logging facilities for Pickbox.
//!
//! Pickbox uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Use the constants in [`targets`] with `tracing` directives to filter
//! logs by subsystem, e.g. `RUST_LOG=pickbox::state=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pickbox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pickbox_core::signal";
    /// Selection state store target.
    pub const STATE: &str = "pickbox::state";
    /// Keyboard interpreter target.
    pub const KEYMAP: &str = "pickbox::keymap";
    /// Focus coordination target.
    pub const FOCUS: &str = "pickbox::focus";
}
