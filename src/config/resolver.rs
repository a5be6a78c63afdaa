//! Config resolution: override selection, required-field checks and the
//! effective locale.

use super::{
    ConfigError,
    ResolvedConfig,
    UserConfig,
    create_config,
};

/// Resolves the config used to build a translation client.
///
/// `config_override` replaces `base` as a whole when present; fields are never
/// merged between the two. The result depends only on the arguments.
///
/// # Errors
/// - `MissingConfig`: neither `base` nor `config_override` given
/// - `MissingLocaleSettings`: selected config has no `i18n`
/// - `MissingDefaultLocale`: `i18n.defaultLocale` unset or empty
/// - `ValidationErrors`: invalid pass-through settings
pub fn resolve(
    base: Option<&UserConfig>,
    config_override: Option<&UserConfig>,
    requested_locale: Option<&str>,
    initial_locale: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    let user_config = config_override.or(base).ok_or(ConfigError::MissingConfig)?;

    let i18n = user_config.i18n.as_ref().ok_or(ConfigError::MissingLocaleSettings)?;

    let default_locale = i18n
        .default_locale
        .as_deref()
        .filter(|locale| !locale.is_empty())
        .ok_or(ConfigError::MissingDefaultLocale)?;

    let lng = effective_locale(requested_locale, initial_locale, default_locale);

    create_config(user_config, default_locale, lng)
}

/// Picks the locale in priority order: requested, initial hint, default.
///
/// Empty strings count as absent.
#[must_use]
pub fn effective_locale<'a>(
    requested_locale: Option<&'a str>,
    initial_locale: Option<&'a str>,
    default_locale: &'a str,
) -> &'a str {
    requested_locale
        .filter(|locale| !locale.is_empty())
        .or_else(|| initial_locale.filter(|locale| !locale.is_empty()))
        .unwrap_or(default_locale)
}
