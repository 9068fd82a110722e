use site_core::Identity;

/// Outcome of reading the persisted session slot.
///
/// Only [`SessionStore::restore`](crate::SessionStore::restore) looks at this;
/// callers outside the crate just see whether a session came back.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoadResult {
    Found(Identity),
    /// Key absent
    Missing,
    /// Key present, holding `null`
    Cleared,
    /// Value present but not decodable
    Corrupted { reason: String },
    /// The storage backend itself failed
    Unavailable { reason: String },
}
