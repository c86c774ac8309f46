//! Custom Dioxus hooks for profile-popup components.

use dioxus::prelude::*;

use crate::state::AppSnapshot;

/// Read the current application snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> AppSnapshot {
    use_context::<Signal<AppSnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after processing commands).
///
/// Use this in components that need to update the snapshot after sending commands.
#[must_use]
pub fn use_snapshot_signal() -> Signal<AppSnapshot> {
    use_context::<Signal<AppSnapshot>>()
}
