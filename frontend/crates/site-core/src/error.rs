use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid view: {value} {location}")]
    InvalidView {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity payload: {message} {location}")]
    InvalidIdentity {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidView error at caller location.
    #[track_caller]
    pub fn invalid_view(value: impl Into<String>) -> Self {
        Self::InvalidView {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidIdentity error at caller location.
    #[track_caller]
    pub fn invalid_identity(message: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
