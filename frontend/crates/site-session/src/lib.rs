//! Session state for the site: who is logged in, mirrored into local storage.
//!
//! The store never restores on its own; bootstrap code calls
//! [`SessionStore::restore`] once after construction.

pub mod error;
pub mod file_storage;
pub(crate) mod load_result;
pub mod memory_storage;
pub mod session_store;
pub mod storage;

pub use error::{SessionError, SessionResult, StorageError, StorageResult};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use session_store::{DEFAULT_STORAGE_KEY, SessionStore};
pub use storage::Storage;

#[cfg(test)]
mod tests;
