use crate::{CoreError, Result as CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names tried, in order, when a view needs something to call the user.
const DISPLAY_NAME_FIELDS: [&str; 3] = ["name", "username", "email"];

/// The authenticated user as supplied by whoever called `login`.
///
/// The payload is opaque: any JSON value except `null` is accepted and
/// persisted verbatim. Nothing here validates or defaults its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Value);

impl Identity {
    /// Wraps a payload. `null` is the absence of an identity, so it yields `None`.
    pub fn new(payload: Value) -> Option<Self> {
        if payload.is_null() {
            None
        } else {
            Some(Self(payload))
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Reads a top-level field when the payload is an object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(field))
    }

    /// Best-effort label for the navigation bar.
    pub fn display_name(&self) -> Option<&str> {
        if let Some(text) = self.0.as_str() {
            return Some(text);
        }

        DISPLAY_NAME_FIELDS
            .iter()
            .find_map(|field| self.get(field).and_then(Value::as_str))
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let payload: Value =
            serde_json::from_str(s).map_err(|e| CoreError::invalid_identity(e.to_string()))?;

        Self::new(payload).ok_or_else(|| CoreError::invalid_identity("payload is null"))
    }
}
