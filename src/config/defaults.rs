//! Pass-through defaults applied while building a [`ResolvedConfig`].

use super::{
    ConfigError,
    ResolvedConfig,
    UserConfig,
};

const DEFAULT_NS: &str = "common";
const DEFAULT_KEY_SEPARATOR: &str = ".";
const DEFAULT_NS_SEPARATOR: &str = ":";
const DEFAULT_LOCALE_PATH: &str = "./public/locales";
const DEFAULT_LOCALE_EXTENSION: &str = "json";

/// Copies `user_config` into a [`ResolvedConfig`] with `lng` set to the given
/// locale. Unset optional fields take their defaults; set ones are kept as is.
///
/// `default_locale` must be the already-checked `i18n.defaultLocale`.
///
/// # Errors
/// Returns `ConfigError::ValidationErrors` when a kept field is invalid.
pub fn create_config(
    user_config: &UserConfig,
    default_locale: &str,
    lng: &str,
) -> Result<ResolvedConfig, ConfigError> {
    let default_ns = user_config.default_ns.clone().unwrap_or_else(|| DEFAULT_NS.to_string());

    let config = ResolvedConfig {
        lng: lng.to_string(),
        default_locale: default_locale.to_string(),
        locales: user_config.i18n.as_ref().map(|i18n| i18n.locales.clone()).unwrap_or_default(),
        ns: user_config.ns.clone().unwrap_or_else(|| vec![default_ns.clone()]),
        default_ns,
        fallback_lng: user_config
            .fallback_lng
            .clone()
            .unwrap_or_else(|| default_locale.to_string()),
        key_separator: user_config
            .key_separator
            .clone()
            .unwrap_or_else(|| DEFAULT_KEY_SEPARATOR.to_string()),
        ns_separator: user_config
            .ns_separator
            .clone()
            .unwrap_or_else(|| DEFAULT_NS_SEPARATOR.to_string()),
        locale_path: user_config
            .locale_path
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE_PATH.to_string()),
        locale_extension: user_config
            .locale_extension
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE_EXTENSION.to_string()),
        interpolation: user_config.interpolation.clone().unwrap_or_default(),
        resources: user_config.resources.clone(),
        debug: user_config.debug,
    };

    config.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(config)
}
