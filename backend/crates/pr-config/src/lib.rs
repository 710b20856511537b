mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

pub const CONFIG_DIR_ENV: &str = "PR_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".pr";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "registry.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_UPLOAD_MIN_SIZE_BYTES: u64 = 1024;
const DEFAULT_UPLOAD_MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_UPLOAD_EXTENSION: &str = "png";
const DEFAULT_UPLOAD_DIRECTORY: &str = "pictures";

#[cfg(test)]
mod tests;
