use crate::{Navigation, NavigationTable, ScrollPosition};

/// Routing engine capability: matching, history and scroll positioning.
///
/// The table is plain data; engines can be swapped without touching it.
pub trait Router {
    fn table(&self) -> &NavigationTable;

    /// Pushes a history entry for `href` and completes the navigation.
    fn navigate(&mut self, href: &str) -> Navigation;

    /// `None` when there is no history entry to go back to.
    fn back(&mut self) -> Option<Navigation>;

    /// `None` when there is no history entry to go forward to.
    fn forward(&mut self) -> Option<Navigation>;

    /// Records the viewport offset against the current history entry.
    fn record_scroll(&mut self, position: ScrollPosition);

    /// The last completed navigation.
    fn current(&self) -> Option<&Navigation>;

    /// Navigates to the path of the entry called `name`.
    fn navigate_named(&mut self, name: &str) -> Option<Navigation> {
        let path = self.table().by_name(name)?.path;
        Some(self.navigate(path))
    }
}
