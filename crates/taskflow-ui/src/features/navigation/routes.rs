//! Routes of the dashboard shell and how menu targets map onto them.

use crate::core::ui::link_target;
use crate::features::navigation::state::entry_by_id;
use yew_router::prelude::*;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Site root; redirects to the dashboard.
    #[at("/")]
    Home,
    /// Dashboard without a section.
    #[at("/dashboard")]
    Dashboard,
    /// Dashboard opened on a section.
    #[at("/dashboard/:section")]
    DashboardSection {
        /// Menu entry id.
        section: String,
    },
    /// Anything unrecognised.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteView {
    /// Navigate to [`Route::Dashboard`].
    RedirectToDashboard,
    /// Render the dashboard page.
    Dashboard,
    /// Render the not-found page.
    NotFound,
}

impl Route {
    /// View for this route; sections must name a declared menu entry.
    #[must_use]
    pub fn view(&self) -> RouteView {
        match self {
            Self::Home => RouteView::RedirectToDashboard,
            Self::Dashboard => RouteView::Dashboard,
            Self::DashboardSection { section } if entry_by_id(section).is_some() => {
                RouteView::Dashboard
            }
            Self::DashboardSection { .. } | Self::NotFound => RouteView::NotFound,
        }
    }
}

/// How a menu row wraps itself for a given target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuLink {
    /// Client-side link to a route this app renders.
    Route(Route),
    /// Plain anchor to any other location.
    Anchor(String),
    /// No wrapper; the row is only clickable.
    None,
}

impl MenuLink {
    /// Classify a row target. Empty and `#` targets render a plain row.
    #[must_use]
    pub fn for_target(target: Option<&str>) -> Self {
        let Some(target) = link_target(target) else {
            return Self::None;
        };
        match Route::recognize(target) {
            Some(route) if route.view() != RouteView::NotFound => Self::Route(route),
            _ => Self::Anchor(target.to_string()),
        }
    }
}
