use crate::{SessionResult, Storage, load_result::LoadResult};

use log::{debug, info, warn};
use serde_json::Value;
use site_core::Identity;
use tokio::sync::watch;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// Single source of truth for "who is the current user".
///
/// The in-memory slot is the value of a watch channel, so subscribers and
/// `is_authenticated` always read the same state. Every mutation writes the
/// persisted slot first and only then updates memory; a storage failure
/// leaves both slots as they were.
pub struct SessionStore<S: Storage> {
    storage: S,
    key: String,
    current: watch::Sender<Option<Identity>>,
}

impl<S: Storage> SessionStore<S> {
    /// Creates an empty (logged-out) store. Does not read storage.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            storage,
            key: key.into(),
            current,
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Commits `identity` to storage and memory, replacing any previous session.
    pub fn login(&self, identity: Identity) -> SessionResult<()> {
        let serialized = serde_json::to_string(&identity)?;
        self.storage.set(&self.key, &serialized)?;

        info!("Session started for {}", identity.display_name().unwrap_or("<anonymous>"));
        self.current.send_replace(Some(identity));
        Ok(())
    }

    /// Removes the persisted entry and clears memory. Logging out twice is fine.
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.remove(&self.key)?;

        if self.current.send_replace(None).is_some() {
            info!("Session ended");
        } else {
            debug!("Logout with no active session");
        }
        Ok(())
    }

    /// Brings back a session persisted by an earlier `login`.
    ///
    /// Returns whether a session was restored. A stored `null` clears the
    /// in-memory slot; anything absent or unreadable leaves it untouched.
    pub fn restore(&self) -> bool {
        match self.load() {
            LoadResult::Found(identity) => {
                info!(
                    "Restored session for {}",
                    identity.display_name().unwrap_or("<anonymous>")
                );
                self.current.send_replace(Some(identity));
                true
            }
            LoadResult::Cleared => {
                debug!("Stored session under '{}' is null", self.key);
                self.current.send_replace(None);
                false
            }
            LoadResult::Missing => {
                debug!("No stored session under '{}'", self.key);
                false
            }
            LoadResult::Corrupted { reason } => {
                warn!("Ignoring undecodable session under '{}': {reason}", self.key);
                false
            }
            LoadResult::Unavailable { reason } => {
                warn!("Session storage unavailable, starting logged out: {reason}");
                false
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    /// Observes every change of the in-memory slot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }

    pub(crate) fn load(&self) -> LoadResult {
        let stored = match self.storage.get(&self.key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return LoadResult::Missing,
            Err(e) => {
                return LoadResult::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        match serde_json::from_str::<Value>(&stored) {
            Ok(payload) => Identity::new(payload).map_or(LoadResult::Cleared, LoadResult::Found),
            Err(e) => LoadResult::Corrupted {
                reason: e.to_string(),
            },
        }
    }
}
