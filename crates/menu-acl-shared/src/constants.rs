//! Application-wide constants

pub const DEFAULT_APP_NAME: &str = "menu-acl";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "menu-acl.log";
pub const DEFAULT_MAX_CATALOG_SIZE: usize = 10_000;
