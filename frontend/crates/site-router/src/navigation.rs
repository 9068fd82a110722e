use crate::{Location, RouteEntry, ScrollTarget};

use serde::Serialize;
use site_core::View;

/// How a navigation was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTrigger {
    /// A link or programmatic navigation adding a history entry
    Push,
    /// History back/forward
    Traverse,
}

/// A completed navigation. Navigations never fail; an unknown path simply
/// has no route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub location: Location,
    pub route: Option<RouteEntry>,
    pub trigger: NavigationTrigger,
    pub scroll: ScrollTarget,
}

impl Navigation {
    pub fn view(&self) -> Option<View> {
        self.route.map(|route| route.view)
    }

    pub fn is_matched(&self) -> bool {
        self.route.is_some()
    }
}
