use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A page of the site. Several routes may share one view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Login,
    Register,
    Gallery,
    Booking,
    Inventory,
    Calendar,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Home,
        View::Login,
        View::Register,
        View::Gallery,
        View::Booking,
        View::Inventory,
        View::Calendar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::Gallery => "gallery",
            Self::Booking => "booking",
            Self::Inventory => "inventory",
            Self::Calendar => "calendar",
        }
    }

    /// Heading shown at the top of the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Welcome",
            Self::Login => "Sign In",
            Self::Register => "Create an Account",
            Self::Gallery => "Gallery",
            Self::Booking => "Book an Appointment",
            Self::Inventory => "Inventory",
            Self::Calendar => "Calendar",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| CoreError::invalid_view(s))
    }
}
