mod app_config;
mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use app_config::AppConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "MF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".mf";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

const DEFAULT_REPORT_REDIRECT_SECS: u64 = 3;
const DEFAULT_REGISTRATION_REDIRECT_SECS: u64 = 5;
const DEFAULT_LOGIN_REDIRECT_SECS: u64 = 0;
const MAX_REDIRECT_SECS: u64 = 30;
const DEFAULT_DEV_ROUTES: bool = false;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
