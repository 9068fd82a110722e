use crate::{AppResult, Page};

use site_config::Config;
use site_router::{
    HistoryRouter, Navigation, NavigationTable, Router, ScrollBehavior, ScrollPolicy,
};
use site_session::{FileStorage, SessionStore, Storage};
use tracing::info;

/// The mounted application: the session store and the routing engine,
/// passed explicitly to whatever renders pages.
pub struct App<S: Storage = FileStorage> {
    session: SessionStore<S>,
    router: HistoryRouter,
}

impl App<FileStorage> {
    /// Wires the configured local storage file and navigation table together.
    pub fn bootstrap(config: &Config) -> AppResult<Self> {
        let storage = FileStorage::new(config.storage_path()?);
        info!("Local storage: {:?}", storage.path());

        Ok(Self::mount(
            storage,
            &config.session.storage_key,
            scroll_policy(config),
        ))
    }
}

impl<S: Storage> App<S> {
    /// Builds the store, restores any previous session once, and sets up
    /// routing over the site table.
    pub fn mount(storage: S, storage_key: &str, policy: ScrollPolicy) -> Self {
        let session = SessionStore::new(storage, storage_key);

        if session.restore() {
            info!("Resumed previous session");
        } else {
            info!("Starting logged out");
        }

        Self {
            session,
            router: HistoryRouter::new(NavigationTable::site(), policy),
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn router(&self) -> &HistoryRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut HistoryRouter {
        &mut self.router
    }

    /// Renders the page for a completed navigation against the current session.
    pub fn render(&self, navigation: &Navigation) -> Page {
        Page::render(
            navigation,
            self.router.table(),
            self.session.identity().as_ref(),
        )
    }
}

fn scroll_policy(config: &Config) -> ScrollPolicy {
    if config.router.smooth_fragment_scroll {
        ScrollPolicy::new(ScrollBehavior::Smooth)
    } else {
        ScrollPolicy::new(ScrollBehavior::Auto)
    }
}
