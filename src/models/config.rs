//! Configuration model loaded from external sources.

use std::collections::HashMap;
use std::env;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::routes::DEFAULT_EVENTS_PATH;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the request table and its preview tool.
pub struct TableConfig {
    #[serde(default = "default_events_path")]
    pub events_path: String,
    /// Glob of host templates; a `request_table.html` found there replaces
    /// the bundled one.
    #[serde(default)]
    pub templates_dir: Option<String>,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PreviewConfig {
    /// `chrono` format string for the date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub statuses: HashMap<String, StatusStyle>,
    #[serde(default = "default_fallback_color")]
    pub fallback_color: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StatusStyle {
    #[serde(default)]
    pub icon: String,
    pub color: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            statuses: HashMap::new(),
            fallback_color: default_fallback_color(),
        }
    }
}

fn default_events_path() -> String {
    DEFAULT_EVENTS_PATH.to_string()
}

fn default_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_fallback_color() -> String {
    "bg-secondary".to_string()
}

impl TableConfig {
    /// Loads `{dir}/default.yaml`, the optional `{dir}/{APP_ENV}.yaml`
    /// profile (defaults to `local`) and `APP_*` environment overrides.
    pub fn load(dir: &str) -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
