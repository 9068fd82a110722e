use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors building a navigation table.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Route '{name}' has invalid path '{path}': must start with '/' {location}")]
    InvalidPath {
        name: String,
        path: String,
        location: ErrorLocation,
    },

    #[error("Duplicate route name '{name}' {location}")]
    DuplicateName {
        name: String,
        location: ErrorLocation,
    },

    #[error("Duplicate route path '{path}' {location}")]
    DuplicatePath {
        path: String,
        location: ErrorLocation,
    },
}

impl RouterError {
    #[track_caller]
    pub fn invalid_path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidPath {
            name: name.into(),
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_path(path: impl Into<String>) -> Self {
        Self::DuplicatePath {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, RouterError>;
