mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "POCKET_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pocket";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
