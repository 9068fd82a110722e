pub mod error;
pub mod history_router;
pub mod location;
pub mod navigation;
pub mod navigation_table;
pub mod route_entry;
pub mod router;
pub mod scroll;

pub use error::{Result, RouterError};
pub use history_router::HistoryRouter;
pub use location::Location;
pub use navigation::{Navigation, NavigationTrigger};
pub use navigation_table::{NavigationTable, SITE_ROUTES};
pub use route_entry::RouteEntry;
pub use router::Router;
pub use scroll::{ScrollBehavior, ScrollPolicy, ScrollPosition, ScrollTarget};

#[cfg(test)]
mod tests;
