//! Class lists for the sidebar and its rows.

use crate::core::classes::merge_classes;
use crate::features::navigation::state::MobileMenu;

/// Hamburger control, shown below the desktop breakpoint.
pub const TOGGLE_BUTTON: &str = "fixed top-4 left-4 z-50 block lg:hidden p-3 bg-bg-background-secondary text-text-primary rounded-md hover:bg-gray-600 focus:outline-none focus:ring-2 focus:ring-gray-400 transition-colors duration-200";

/// Dimmed overlay behind the open panel.
pub const OVERLAY: &str = "fixed inset-0 bg-black bg-opacity-50 z-40 lg:hidden";

/// Close control inside the panel.
pub const CLOSE_BUTTON: &str = "absolute top-4 right-4 lg:hidden p-2 text-text-primary hover:bg-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-gray-400 transition-colors duration-200";

/// Column wrapping the panel contents.
pub const PANEL_CONTENT: &str = "flex flex-col h-full w-full pt-[70px] px-4 lg:px-0";

/// Container around the menu.
pub const MENU_CONTAINER: &str = "flex-1 mt-4 lg:mt-0";

/// Footer holding the brand name, desktop only.
pub const FOOTER: &str = "mt-auto pb-6 hidden lg:block";

/// Brand line inside the footer.
pub const FOOTER_BRAND: &str = "text-center text-text-primary opacity-60 text-sm";

const PANEL_BASE: &str =
    "fixed top-0 left-0 h-full bg-bg-sidebar-background transition-transform duration-300 ease-in-out z-40";
const PANEL_MOBILE: &str = "transform -translate-x-full lg:translate-x-0";
const PANEL_MOBILE_OPEN: &str = "translate-x-0";
const PANEL_DESKTOP: &str = "lg:static lg:transform-none";
const PANEL_RESPONSIVE_WIDTH: &str = "sm:max-w-xs md:max-w-sm";
const SPACER_BASE: &str = "hidden lg:block flex-shrink-0 transition-all duration-300";

const MENU_NAV: &str = "flex flex-col justify-start items-center w-full";
const MENU_ROW: &str = "flex flex-row justify-start items-center w-full px-[10px] py-[10px] transition-colors duration-200 hover:bg-gray-600 hover:bg-opacity-30 rounded-md cursor-pointer";
const MENU_ROW_ACTIVE: &str = "bg-gray-600 bg-opacity-30";
const MENU_TEXT: &str = "text-[30px] sm:text-[24px] md:text-[28px] lg:text-[30px] font-normal leading-[37px] text-left text-[#fcfcfc] font-['Inter']";

/// Width preset of the sidebar column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarWidth {
    /// Icon-rail width.
    Narrow,
    /// Full label width.
    Wide,
}

impl SidebarWidth {
    /// Width preset for a collapsed flag.
    #[must_use]
    pub const fn for_collapsed(collapsed: bool) -> Self {
        if collapsed { Self::Narrow } else { Self::Wide }
    }

    const fn panel_classes(self) -> &'static str {
        match self {
            Self::Narrow => "w-16 lg:w-20",
            Self::Wide => "w-full max-w-sm lg:w-[36%] lg:max-w-[400px]",
        }
    }

    const fn spacer_classes(self) -> &'static str {
        match self {
            Self::Narrow => "w-16 lg:w-20",
            Self::Wide => "w-[36%] max-w-[400px]",
        }
    }
}

/// Classes for the sliding panel. `extra` wins over the defaults.
#[must_use]
pub fn panel_classes(menu: MobileMenu, width: SidebarWidth, extra: &str) -> String {
    merge_classes([
        PANEL_BASE,
        PANEL_MOBILE,
        if menu.is_open() { PANEL_MOBILE_OPEN } else { "" },
        PANEL_DESKTOP,
        width.panel_classes(),
        PANEL_RESPONSIVE_WIDTH,
        extra,
    ])
}

/// Classes for the desktop spacer that reserves the column width.
#[must_use]
pub fn spacer_classes(width: SidebarWidth) -> String {
    merge_classes([SPACER_BASE, width.spacer_classes()])
}

/// Classes for the `<nav>` wrapping the rows.
#[must_use]
pub fn menu_nav_classes(extra: &str) -> String {
    merge_classes([MENU_NAV, extra])
}

/// Classes for one row.
#[must_use]
pub fn menu_row_classes(active: bool, extra: &str) -> String {
    merge_classes([MENU_ROW, if active { MENU_ROW_ACTIVE } else { "" }, extra])
}

/// Classes for a row label.
#[must_use]
pub fn menu_text_classes(extra: &str) -> String {
    merge_classes([MENU_TEXT, extra])
}
