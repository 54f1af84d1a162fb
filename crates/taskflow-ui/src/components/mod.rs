pub(crate) mod atoms;
pub(crate) mod sidebar;
pub(crate) mod sidebar_menu;
