use serde::Serialize;
use site_core::{Identity, View};
use site_router::{Navigation, NavigationTable};

const NOT_FOUND_TITLE: &str = "Page Not Found";
const ACCOUNT_ROUTES: [&str; 2] = ["Login", "Register"];
const FALLBACK_NAME: &str = "Account";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Right-hand side of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccountArea {
    SignedOut { links: Vec<NavLink> },
    SignedIn { name: String },
}

/// Textual render of the root view for one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub view: Option<View>,
    /// In-page section the location points at, if any
    pub section: Option<String>,
    pub nav: Vec<NavLink>,
    pub account: AccountArea,
}

impl Page {
    pub fn render(
        navigation: &Navigation,
        table: &NavigationTable,
        identity: Option<&Identity>,
    ) -> Self {
        let active = navigation.route.map(|route| route.name);

        let link = |name: &'static str, path: &'static str| NavLink {
            label: name,
            href: path,
            active: active == Some(name),
        };

        let nav = table
            .entries()
            .iter()
            .filter(|entry| !ACCOUNT_ROUTES.contains(&entry.name))
            .map(|entry| link(entry.name, entry.path))
            .collect();

        let account = match identity {
            Some(identity) => AccountArea::SignedIn {
                name: identity.display_name().unwrap_or(FALLBACK_NAME).to_string(),
            },
            None => AccountArea::SignedOut {
                links: table
                    .entries()
                    .iter()
                    .filter(|entry| ACCOUNT_ROUTES.contains(&entry.name))
                    .map(|entry| link(entry.name, entry.path))
                    .collect(),
            },
        };

        Self {
            title: navigation.view().map_or(NOT_FOUND_TITLE, |view| view.title()),
            view: navigation.view(),
            section: navigation.location.fragment().map(str::to_string),
            nav,
            account,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.account, AccountArea::SignedIn { .. })
    }
}
