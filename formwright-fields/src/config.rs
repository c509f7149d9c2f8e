//! Form configuration loaded with Figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. An optional configuration file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables with the `FORMWRIGHT_` prefix

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "FORMWRIGHT_";

/// Presentation strings and editor parsing rules.
///
/// The defaults reproduce the stock behavior: fields named `field0`,
/// `field1`, ..., options split on commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Prefix of derived field names
    pub name_prefix: String,
    /// Separator for the editor's raw options text
    pub option_delimiter: char,
    /// Placeholder of single- and multi-line text inputs
    pub text_placeholder: String,
    /// Placeholder of dropdowns
    pub select_placeholder: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_prefix: "field".to_string(),
            option_delimiter: ',',
            text_placeholder: "Please Enter".to_string(),
            select_placeholder: "Please select".to_string(),
        }
    }
}

impl FormConfig {
    /// Load from defaults and the environment only.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::base_figment())
    }

    /// Load from defaults, then `path`, then the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        trace!(path = %path.display(), format = %ext, "loading config file");

        let file = match ext.as_str() {
            "toml" => Figment::from(Toml::file(path)),
            "yaml" | "yml" => Figment::from(Yaml::file(path)),
            "json" => Figment::from(Json::file(path)),
            other => {
                return Err(ConfigError::UnsupportedFormat {
                    format: other.to_string(),
                })
            }
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(FormConfig::default()))
            .merge(file)
            .merge(Self::env());
        Self::from_figment(figment)
    }

    fn base_figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FormConfig::default()))
            .merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX)
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: FormConfig = figment.extract()?;
        config.validate()?;
        debug!(
            name_prefix = %config.name_prefix,
            option_delimiter = %config.option_delimiter,
            "form configuration loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "name_prefix".into(),
                message: "must not be empty".into(),
            });
        }
        if self.option_delimiter.is_whitespace() {
            return Err(ConfigError::InvalidValue {
                key: "option_delimiter".into(),
                message: "must not be whitespace".into(),
            });
        }
        Ok(())
    }

    /// Name of the field created at insertion index `index`.
    pub fn field_name(&self, index: usize) -> String {
        format!("{}{}", self.name_prefix, index)
    }
}
