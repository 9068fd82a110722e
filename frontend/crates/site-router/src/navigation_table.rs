use crate::{Location, Result as RouterResult, RouteEntry, RouterError};

use std::collections::HashSet;

use site_core::View;

/// The site's routes. About and Services are sections of the home page.
pub const SITE_ROUTES: [RouteEntry; 9] = [
    RouteEntry::new("Home", "/", View::Home),
    RouteEntry::new("About", "/#About", View::Home),
    RouteEntry::new("Services", "/#Services", View::Home),
    RouteEntry::new("Login", "/login", View::Login),
    RouteEntry::new("Register", "/register", View::Register),
    RouteEntry::new("Gallery", "/gallery", View::Gallery),
    RouteEntry::new("Booking", "/booking", View::Booking),
    RouteEntry::new("Inventory", "/inventory", View::Inventory),
    RouteEntry::new("Calendar", "/calendar", View::Calendar),
];

/// Immutable path → view mapping handed to a routing engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTable {
    entries: Vec<RouteEntry>,
}

impl NavigationTable {
    /// Builds a table, rejecting relative paths and duplicate names or paths.
    ///
    /// Several entries may point at the same view.
    pub fn new(entries: Vec<RouteEntry>) -> RouterResult<Self> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouterError::invalid_path(entry.name, entry.path));
            }
            if !names.insert(entry.name) {
                return Err(RouterError::duplicate_name(entry.name));
            }
            if !paths.insert(entry.path) {
                return Err(RouterError::duplicate_path(entry.path));
            }
        }

        Ok(Self { entries })
    }

    pub fn site() -> Self {
        Self {
            entries: SITE_ROUTES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact match on path plus fragment, then on the bare path.
    ///
    /// `/#About` finds the About entry; `/#Contact` falls back to `/`.
    /// The query string never takes part.
    pub fn resolve(&self, location: &Location) -> Option<&RouteEntry> {
        let key = location.route_key();

        self.entries
            .iter()
            .find(|entry| entry.path == key)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.path == location.path())
            })
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl Default for NavigationTable {
    fn default() -> Self {
        Self::site()
    }
}
