//! Shared UI atoms used by the sidebar.

pub(crate) mod icons;
pub(crate) mod menu_item;
pub(crate) mod menu_text;

pub(crate) use menu_item::MenuItem;
pub(crate) use menu_text::MenuText;
