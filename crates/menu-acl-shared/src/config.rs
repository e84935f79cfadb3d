//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_LOG_FILE_PREFIX, DEFAULT_LOG_FILTER,
    DEFAULT_MAX_CATALOG_SIZE,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub telemetry: TelemetrySettings,
    pub editor: EditorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    pub json: bool,
    /// When set, logs go to a daily rolling file in this directory instead of stdout.
    pub log_dir: Option<String>,
    pub file_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorSettings {
    /// Catalogs larger than this are refused before a tree is built.
    pub max_catalog_size: usize,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
            log_dir: None,
            file_prefix: DEFAULT_LOG_FILE_PREFIX.to_string(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self { max_catalog_size: DEFAULT_MAX_CATALOG_SIZE }
    }
}

impl AppConfig {
    /// Load configuration from `config/default`, `config/{APP_ENV}` and
    /// `MENU_ACL__*` environment variables, in increasing precedence.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        Self::builder(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("MENU_ACL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder(env: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("telemetry.filter", DEFAULT_LOG_FILTER)?
            .set_default("telemetry.json", false)?
            .set_default("telemetry.file_prefix", DEFAULT_LOG_FILE_PREFIX)?
            .set_default("editor.max_catalog_size", DEFAULT_MAX_CATALOG_SIZE as i64)
    }
}
