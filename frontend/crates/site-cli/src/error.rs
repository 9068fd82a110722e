use std::panic::Location;

use error_location::ErrorLocation;
use site_config::ConfigError;
use site_core::CoreError;
use site_session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid visit step '{step}': {message} {location}")]
    InvalidStep {
        step: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Logging setup failed: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn invalid_step(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStep {
            step: step.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Hint printed under the error, when there is one.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Session { source, .. } => Some(source.recovery_hint()),
            Self::InvalidStep { .. } => {
                Some("Steps are hrefs, 'back', 'forward', 'scroll:<top>' or 'scroll:<left>,<top>'.")
            }
            _ => None,
        }
    }
}

impl From<ConfigError> for AppError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for AppError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
