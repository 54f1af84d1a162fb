//! Dashboard page state.

use crate::features::navigation::state::{DEFAULT_MENU_ITEM, MenuEntry};

/// Selection tracked by the dashboard page and fed to the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    /// Id of the section last chosen in the sidebar.
    pub active_menu_item: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_menu_item: DEFAULT_MENU_ITEM.to_string(),
        }
    }
}

impl DashboardState {
    /// Record the entry chosen in the sidebar.
    pub fn select(&mut self, entry: &MenuEntry) {
        entry.id.clone_into(&mut self.active_menu_item);
    }
}
