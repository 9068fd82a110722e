mod app;

use crate::App;

use std::env;
use std::sync::Arc;

use site_router::ScrollPolicy;
use site_session::MemoryStorage;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// App over shared in-memory storage, so a second mount sees the first one's writes.
pub(crate) fn mount(storage: &Arc<MemoryStorage>) -> App<Arc<MemoryStorage>> {
    App::mount(Arc::clone(storage), "user", ScrollPolicy::default())
}
