use crate::Location;

use serde::Serialize;
use site_core::View;

/// One static line of the navigation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    /// May carry a `#fragment` selecting a section of the view
    pub path: &'static str,
    pub view: View,
}

impl RouteEntry {
    pub const fn new(name: &'static str, path: &'static str, view: View) -> Self {
        Self { name, path, view }
    }

    pub fn location(&self) -> Location {
        Location::parse(self.path)
    }
}
