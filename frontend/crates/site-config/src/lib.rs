mod config;
mod error;
mod log_level;
mod logging_config;
mod router_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use router_config::RouterConfig;
pub use session_config::SessionConfig;

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV: &str = "SITE_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".site";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_KEY: &str = "user";
const DEFAULT_STORAGE_FILENAME: &str = "local_storage.json";
const DEFAULT_SMOOTH_FRAGMENT_SCROLL: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
