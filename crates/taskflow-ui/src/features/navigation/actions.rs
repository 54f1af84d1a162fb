//! Callback wiring between menu rows, the sidebar drawer and the page.

use crate::core::ui::emit_optional;
use crate::features::navigation::state::MenuEntry;
use yew::Callback;

/// Activation handler for one row: reports `entry` to `listener`, if any.
#[must_use]
pub fn row_activation(entry: MenuEntry, listener: Option<Callback<MenuEntry>>) -> Callback<()> {
    Callback::from(move |()| {
        emit_optional(listener.as_ref(), entry);
    })
}

/// Sidebar handler for a row selection: closes the drawer first, then forwards the entry.
#[must_use]
pub fn close_then_forward(
    close: Callback<()>,
    forward: Option<Callback<MenuEntry>>,
) -> Callback<MenuEntry> {
    Callback::from(move |entry: MenuEntry| {
        close.emit(());
        emit_optional(forward.as_ref(), entry);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::navigation::state::{
        MENU_ENTRIES, MobileMenu, MobileMenuEvent, entry_by_id,
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn row_reports_its_own_entry() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener = {
            let seen = Rc::clone(&seen);
            Callback::from(move |entry: MenuEntry| seen.borrow_mut().push(entry.id))
        };
        for entry in MENU_ENTRIES {
            row_activation(entry, Some(listener.clone())).emit(());
        }
        let ids: Vec<&str> = MENU_ENTRIES.iter().map(|entry| entry.id).collect();
        assert_eq!(*seen.borrow(), ids);
    }

    #[test]
    fn row_without_listener_is_silent() {
        let entry = entry_by_id("add-deadline").expect("declared entry");
        row_activation(entry, None).emit(());
    }

    #[test]
    fn sidebar_closes_drawer_before_forwarding() {
        let drawer = Rc::new(Cell::new(MobileMenu::Open));
        let log = Rc::new(RefCell::new(Vec::new()));
        let close = {
            let drawer = Rc::clone(&drawer);
            let log = Rc::clone(&log);
            Callback::from(move |()| {
                drawer.set(drawer.get().apply(MobileMenuEvent::MenuItemActivated));
                log.borrow_mut().push("close".to_string());
            })
        };
        let forward = {
            let drawer = Rc::clone(&drawer);
            let log = Rc::clone(&log);
            Callback::from(move |entry: MenuEntry| {
                assert_eq!(drawer.get(), MobileMenu::Closed);
                log.borrow_mut().push(entry.id.to_string());
            })
        };

        let tasks = entry_by_id("my-tasks").expect("declared entry");
        let on_select = close_then_forward(close, Some(forward));
        row_activation(tasks, Some(on_select)).emit(());

        assert_eq!(*log.borrow(), vec!["close".to_string(), "my-tasks".to_string()]);
        assert_eq!(drawer.get(), MobileMenu::Closed);
    }

    #[test]
    fn sidebar_still_closes_without_page_listener() {
        let closes = Rc::new(Cell::new(0u32));
        let close = {
            let closes = Rc::clone(&closes);
            Callback::from(move |()| closes.set(closes.get() + 1))
        };
        close_then_forward(close, None).emit(MENU_ENTRIES[4]);
        assert_eq!(closes.get(), 1);
    }
}
