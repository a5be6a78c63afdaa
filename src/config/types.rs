use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::resources::ResourceStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "interpolation.prefix")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Translation was initialized without a config")]
    MissingConfig,

    #[error("Translation was initialized without config.i18n")]
    MissingLocaleSettings,

    #[error("config.i18n does not include a defaultLocale property")]
    MissingDefaultLocale,

    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// User supplied configuration.
///
/// Used both as the base config carried by the server payload and as the
/// per-call-site override. An override replaces the base as a whole.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    pub i18n: Option<I18nLocaleSettings>,

    /// Namespace used when a key carries no `ns:` prefix.
    #[serde(rename = "defaultNS")]
    pub default_ns: Option<String>,
    pub ns: Option<Vec<String>>,

    /// Language searched when a key is missing in the active locale.
    /// Defaults to `i18n.defaultLocale`.
    pub fallback_lng: Option<String>,

    pub key_separator: Option<String>,
    pub ns_separator: Option<String>,

    pub locale_path: Option<String>,
    pub locale_extension: Option<String>,

    pub interpolation: Option<InterpolationConfig>,

    /// Bundles shipped with the config itself. Usually empty; the server
    /// payload carries the real store.
    pub resources: Option<ResourceStore>,

    pub debug: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nLocaleSettings {
    pub default_locale: Option<String>,
    pub locales: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterpolationConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self { prefix: "{{".to_string(), suffix: "}}".to_string() }
    }
}

/// Fully resolved configuration handed to the client factory.
///
/// Produced once per resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Effective locale.
    pub lng: String,
    pub default_locale: String,
    pub locales: Vec<String>,
    #[serde(rename = "defaultNS")]
    pub default_ns: String,
    pub ns: Vec<String>,
    pub fallback_lng: String,
    pub key_separator: String,
    pub ns_separator: String,
    pub locale_path: String,
    pub locale_extension: String,
    pub interpolation: InterpolationConfig,
    pub resources: Option<ResourceStore>,
    pub debug: bool,
}

impl ResolvedConfig {
    /// # Errors
    /// - Empty separator
    /// - Empty namespace
    /// - Empty interpolation delimiter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.ns_separator.is_empty() {
            errors.push(ValidationError::new(
                "nsSeparator",
                "The separator cannot be empty. Please specify a separator (e.g., \":\"), or remove this field",
            ));
        }

        if self.default_ns.is_empty() {
            errors.push(ValidationError::new(
                "defaultNS",
                "The default namespace cannot be empty. Example: \"common\"",
            ));
        }

        for (index, ns) in self.ns.iter().enumerate() {
            if ns.is_empty() {
                errors.push(ValidationError::new(
                    format!("ns[{index}]"),
                    "Namespace names cannot be empty",
                ));
            }
        }

        if self.interpolation.prefix.is_empty() {
            errors.push(ValidationError::new(
                "interpolation.prefix",
                "The delimiter cannot be empty. Example: \"{{\"",
            ));
        }

        if self.interpolation.suffix.is_empty() {
            errors.push(ValidationError::new(
                "interpolation.suffix",
                "The delimiter cannot be empty. Example: \"}}\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
