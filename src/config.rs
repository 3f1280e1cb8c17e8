use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the definition files live
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_questionnaire_file")]
    pub questionnaire_file: String,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            questionnaire_file: default_questionnaire_file(),
            catalog_dir: default_catalog_dir(),
        }
    }
}

fn default_questionnaire_file() -> String {
    "data/questionnaire.json".to_string()
}

fn default_catalog_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            result_cap: default_result_cap(),
        }
    }
}

fn default_result_cap() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BEAUTYMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. BEAUTYMATCH_MATCHING__RESULT_CAP -> matching.result_cap
            .add_source(
                Environment::with_prefix("BEAUTYMATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BEAUTYMATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
