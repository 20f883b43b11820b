//! Configuration for schema rules.
//!
//! [`GenerationConfig`] is the read-only option set rules consult. It is
//! usually loaded once per generation run from a `jsonschema-rules.toml`
//! file and then shared by reference across every rule application.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "jsonschema-rules.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Code generation options.
    pub generation: GenerationConfig,
}

/// Code generation options consulted by rules.
///
/// Every flag defaults to `false`: an absent option never adds output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Attach bean validation constraints (`@NotNull`) to required fields.
    #[serde(alias = "include_jsr303_annotations")]
    pub include_not_null_annotations: bool,

    /// Attach nullness hints (`@Nonnull` / `@Nullable`) to fields.
    #[serde(alias = "include_jsr305_annotations")]
    pub include_nullability_annotations: bool,
}

impl GenerationConfig {
    /// Create a config with every option disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to attach validation constraints.
    pub fn with_not_null_annotations(mut self, include: bool) -> Self {
        self.include_not_null_annotations = include;
        self
    }

    /// Set whether to attach nullness hints.
    pub fn with_nullability_annotations(mut self, include: bool) -> Self {
        self.include_nullability_annotations = include;
        self
    }
}

/// Configuration manager for loading configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// An explicit path must exist. With no path, the default file in the
    /// current directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                if !default_path.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILENAME);
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config = Self::parse(&config_path, &content)?;
        tracing::debug!(
            path = %config_path.display(),
            not_null = config.generation.include_not_null_annotations,
            nullability = config.generation.include_nullability_annotations,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text. `path` is only used for errors.
    pub fn parse(path: &Path, content: &str) -> ConfigResult<Config> {
        toml::from_str(content)
            .map_err(|e| ConfigError::invalid_toml(path.to_path_buf(), e.to_string()))
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# jsonschema-rules configuration file

[generation]
# Add @javax.validation.constraints.NotNull to fields of required properties
include_not_null_annotations = false

# Add @javax.annotation.Nonnull to required fields and
# @javax.annotation.Nullable to the others
include_nullability_annotations = false
"#
    }
}
