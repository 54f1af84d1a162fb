//! Sidebar navigation state.
//!
//! # Design
//! - Menu entries are a static, ordered table; order is display order.
//! - The selection is owned by the page; the menu derives its active row from the id it
//!   is handed on every render and holds no copy of its own.
//! - The mobile drawer is a two-state machine local to the sidebar and never touches
//!   the selection.

/// Identifier of the entry selected before any interaction.
pub const DEFAULT_MENU_ITEM: &str = "overview";

/// One navigation row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Stable identifier, unique within [`MENU_ENTRIES`].
    pub id: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Navigable location.
    pub target: &'static str,
}

/// Dashboard sections in display order.
pub const MENU_ENTRIES: [MenuEntry; 5] = [
    MenuEntry {
        id: DEFAULT_MENU_ITEM,
        label: "📊 Overview",
        target: "/dashboard/overview",
    },
    MenuEntry {
        id: "add-deadline",
        label: "➕ Add Deadline",
        target: "/dashboard/add-deadline",
    },
    MenuEntry {
        id: "upcoming-deadlines",
        label: "⏰ Upcoming Deadlines",
        target: "/dashboard/upcoming-deadlines",
    },
    MenuEntry {
        id: "my-tasks",
        label: "📝 My Tasks",
        target: "/dashboard/my-tasks",
    },
    MenuEntry {
        id: "progress-reports",
        label: "📈 Progress Reports",
        target: "/dashboard/progress-reports",
    },
];

/// Look up a declared entry by id.
#[must_use]
pub fn entry_by_id(id: &str) -> Option<MenuEntry> {
    MENU_ENTRIES.iter().copied().find(|entry| entry.id == id)
}

/// Active-row test for the selection handed to the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSelection<'a> {
    selected: &'a str,
}

impl<'a> MenuSelection<'a> {
    /// Wrap the selected id; ids matching no entry leave every row inactive.
    #[must_use]
    pub const fn new(selected: &'a str) -> Self {
        Self { selected }
    }

    /// Whether `entry` renders as active.
    #[must_use]
    pub fn is_active(&self, entry: &MenuEntry) -> bool {
        entry.id == self.selected
    }
}

/// Visibility of the off-canvas menu below the desktop breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    /// Panel off-screen, no overlay.
    #[default]
    Closed,
    /// Panel on-screen with the dimmed overlay.
    Open,
}

/// Inputs that move the mobile menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileMenuEvent {
    /// Hamburger control activated.
    ToggleControl,
    /// Close control inside the panel activated.
    CloseControl,
    /// Dimmed overlay activated.
    Overlay,
    /// Any menu row activated.
    MenuItemActivated,
}

impl MobileMenu {
    /// Next state after `event`.
    #[must_use]
    pub const fn apply(self, event: MobileMenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MobileMenuEvent::ToggleControl) => Self::Open,
            (Self::Open, MobileMenuEvent::ToggleControl)
            | (_, MobileMenuEvent::CloseControl)
            | (_, MobileMenuEvent::Overlay)
            | (_, MobileMenuEvent::MenuItemActivated) => Self::Closed,
        }
    }

    /// Whether the panel is on-screen.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entries_are_unique_and_ordered() {
        let ids: Vec<&str> = MENU_ENTRIES.iter().map(|entry| entry.id).collect();
        assert_eq!(
            ids,
            vec![
                "overview",
                "add-deadline",
                "upcoming-deadlines",
                "my-tasks",
                "progress-reports"
            ]
        );
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), MENU_ENTRIES.len());
        for entry in MENU_ENTRIES {
            assert_eq!(entry.target, format!("/dashboard/{}", entry.id));
        }
    }

    #[test]
    fn exactly_one_entry_is_active_for_each_declared_id() {
        for declared in MENU_ENTRIES {
            let selection = MenuSelection::new(declared.id);
            let active: Vec<&str> = MENU_ENTRIES
                .iter()
                .filter(|entry| selection.is_active(entry))
                .map(|entry| entry.id)
                .collect();
            assert_eq!(active, vec![declared.id]);
        }
    }

    #[test]
    fn unknown_selection_marks_nothing_active() {
        let selection = MenuSelection::new("archived");
        assert!(MENU_ENTRIES.iter().all(|entry| !selection.is_active(entry)));
        assert_eq!(entry_by_id("archived"), None);
    }

    #[test]
    fn toggle_control_flips_state() {
        let open = MobileMenu::default().apply(MobileMenuEvent::ToggleControl);
        assert_eq!(open, MobileMenu::Open);
        assert_eq!(
            open.apply(MobileMenuEvent::ToggleControl),
            MobileMenu::Closed
        );
    }

    #[test]
    fn dismissals_always_close() {
        for event in [
            MobileMenuEvent::CloseControl,
            MobileMenuEvent::Overlay,
            MobileMenuEvent::MenuItemActivated,
        ] {
            assert_eq!(MobileMenu::Open.apply(event), MobileMenu::Closed);
            assert_eq!(MobileMenu::Closed.apply(event), MobileMenu::Closed);
        }
    }
}
