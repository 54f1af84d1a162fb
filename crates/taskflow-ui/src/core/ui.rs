//! Interaction primitives shared by the menu components.

use yew::Callback;

/// Link target meaning "render a plain row, not a link".
pub const NO_TARGET: &str = "#";

/// Whether a `KeyboardEvent::key` value activates a focused row.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Navigable target for a row, or `None` when it should not be wrapped in a link.
#[must_use]
pub fn link_target(target: Option<&str>) -> Option<&str> {
    target.filter(|target| !target.is_empty() && *target != NO_TARGET)
}

/// Emit `value` when a callback was supplied. Returns whether it fired.
pub fn emit_optional<T>(callback: Option<&Callback<T>>, value: T) -> bool {
    callback.map(|callback| callback.emit(value)).is_some()
}
