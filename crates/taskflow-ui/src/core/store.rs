//! App-wide yewdux store slices.
//!
//! # Design
//! - Only viewport facts live here; selection and drawer state stay component-local.
//! - Reducers are plain functions so they run in native tests.

use crate::core::breakpoints::{self, Breakpoint};
use yewdux::store::Store;

/// Width assumed before the first measurement, matching a typical laptop.
pub const FALLBACK_WIDTH: u16 = 1280;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Current viewport measurements.
    pub viewport: ViewportSlice,
}

/// Viewport width and the breakpoint it falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSlice {
    /// Inner window width in CSS pixels.
    pub width: u16,
    /// Breakpoint containing `width`.
    pub breakpoint: Breakpoint,
}

impl Default for ViewportSlice {
    fn default() -> Self {
        Self::for_width(FALLBACK_WIDTH)
    }
}

impl ViewportSlice {
    /// Build a slice for a measured width.
    #[must_use]
    pub fn for_width(width: u16) -> Self {
        Self {
            width,
            breakpoint: breakpoints::for_width(width),
        }
    }

    /// Whether the sidebar is laid out as a static desktop column.
    #[must_use]
    pub const fn is_desktop(&self) -> bool {
        breakpoints::is_desktop(self.width)
    }
}

/// Record a new viewport width. Returns whether the breakpoint changed.
pub fn apply_width(store: &mut AppStore, width: u16) -> bool {
    let next = ViewportSlice::for_width(width);
    let changed = next.breakpoint != store.viewport.breakpoint;
    store.viewport = next;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_desktop() {
        let store = AppStore::default();
        assert_eq!(store.viewport.breakpoint, breakpoints::XL);
        assert!(store.viewport.is_desktop());
    }

    #[test]
    fn apply_width_reports_breakpoint_changes_only() {
        let mut store = AppStore::default();
        assert!(!apply_width(&mut store, 1300));
        assert_eq!(store.viewport.width, 1300);
        assert!(apply_width(&mut store, 500));
        assert_eq!(store.viewport.breakpoint, breakpoints::XS);
        assert!(!store.viewport.is_desktop());
    }
}
