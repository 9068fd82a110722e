use crate::{
    Location, Navigation, NavigationTable, NavigationTrigger, Router, ScrollPolicy,
    ScrollPosition,
};

use log::{debug, warn};

#[derive(Debug, Clone)]
struct HistoryEntry {
    location: Location,
    saved_scroll: Option<ScrollPosition>,
}

/// In-process history stack, the engine behind the site's navigation table.
///
/// Behaves like browser session history: pushing drops any forward entries,
/// and each entry keeps the last scroll offset recorded while it was current.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    table: NavigationTable,
    policy: ScrollPolicy,
    entries: Vec<HistoryEntry>,
    index: usize,
    current: Option<Navigation>,
}

impl HistoryRouter {
    pub fn new(table: NavigationTable, policy: ScrollPolicy) -> Self {
        Self {
            table,
            policy,
            entries: Vec::new(),
            index: 0,
            current: None,
        }
    }

    pub fn policy(&self) -> ScrollPolicy {
        self.policy
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn traverse_to(&mut self, index: usize) -> Option<Navigation> {
        let entry = self.entries.get(index)?.clone();
        self.index = index;
        Some(self.complete(
            entry.location,
            NavigationTrigger::Traverse,
            entry.saved_scroll,
        ))
    }

    fn complete(
        &mut self,
        location: Location,
        trigger: NavigationTrigger,
        saved: Option<ScrollPosition>,
    ) -> Navigation {
        let route = self.table.resolve(&location).copied();
        let scroll = self.policy.target(&location, trigger, saved);

        match &route {
            Some(route) => debug!(
                "Navigated to {location} ({:?}): route {} -> {}, scroll {scroll:?}",
                trigger, route.name, route.view
            ),
            None => warn!("No route matches {location}"),
        }

        let navigation = Navigation {
            location,
            route,
            trigger,
            scroll,
        };
        self.current = Some(navigation.clone());
        navigation
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(NavigationTable::site(), ScrollPolicy::default())
    }
}

impl Router for HistoryRouter {
    fn table(&self) -> &NavigationTable {
        &self.table
    }

    fn navigate(&mut self, href: &str) -> Navigation {
        let location = Location::parse(href);

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(HistoryEntry {
            location: location.clone(),
            saved_scroll: None,
        });
        self.index = self.entries.len() - 1;

        self.complete(location, NavigationTrigger::Push, None)
    }

    fn back(&mut self) -> Option<Navigation> {
        if !self.can_go_back() {
            return None;
        }
        self.traverse_to(self.index - 1)
    }

    fn forward(&mut self) -> Option<Navigation> {
        if !self.can_go_forward() {
            return None;
        }
        self.traverse_to(self.index + 1)
    }

    fn record_scroll(&mut self, position: ScrollPosition) {
        if let Some(entry) = self.entries.get_mut(self.index) {
            entry.saved_scroll = Some(position);
        }
    }

    fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }
}
