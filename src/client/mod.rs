//! Translation client and the factory seam used by the instance cache.

/// i18next plural suffix handling
pub mod plural;

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::config::ResolvedConfig;
use crate::resources::{
    ResourceStore,
    flatten_json,
};

/// Errors raised while turning a resource snapshot into a client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientBuildError {
    #[error("Resource store contains an empty locale name")]
    EmptyLocale,

    #[error("Resource store contains an empty namespace name for locale '{locale}'")]
    EmptyNamespace { locale: String },

    #[error("Namespace '{namespace}' of locale '{locale}' must be an object, found {found}")]
    MalformedNamespace { locale: String, namespace: String, found: &'static str },
}

/// Builds translation clients from a resolved config and resource snapshot.
pub trait ClientFactory {
    /// # Errors
    /// Returns `ClientBuildError` when the resource snapshot is malformed.
    fn build(
        &self,
        config: &ResolvedConfig,
        resources: &ResourceStore,
    ) -> Result<TranslationClient, ClientBuildError>;
}

impl<F: ClientFactory + ?Sized> ClientFactory for &F {
    fn build(
        &self,
        config: &ResolvedConfig,
        resources: &ResourceStore,
    ) -> Result<TranslationClient, ClientBuildError> {
        (**self).build(config, resources)
    }
}

/// Factory producing [`TranslationClient`]s from i18next-shaped bundles.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultClientFactory;

impl ClientFactory for DefaultClientFactory {
    fn build(
        &self,
        config: &ResolvedConfig,
        resources: &ResourceStore,
    ) -> Result<TranslationClient, ClientBuildError> {
        let mut keys: HashMap<String, HashMap<String, HashMap<String, String>>> = HashMap::new();

        for (locale, namespace, bundle) in resources.iter() {
            if locale.is_empty() {
                return Err(ClientBuildError::EmptyLocale);
            }
            if namespace.is_empty() {
                return Err(ClientBuildError::EmptyNamespace { locale: locale.to_string() });
            }
            if !bundle.is_object() {
                return Err(ClientBuildError::MalformedNamespace {
                    locale: locale.to_string(),
                    namespace: namespace.to_string(),
                    found: json_type_name(bundle),
                });
            }

            keys.entry(locale.to_string())
                .or_default()
                .insert(namespace.to_string(), flatten_json(bundle, &config.key_separator, None));
        }

        tracing::debug!(
            "Built translation client for '{}' with {} locale(s)",
            config.lng,
            keys.len()
        );

        Ok(TranslationClient { config: config.clone(), keys })
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A translation client bound to one resolved config and resource snapshot.
///
/// Missing keys resolve to the key itself.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    config: ResolvedConfig,
    /// locale -> namespace -> flattened key -> value
    keys: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl TranslationClient {
    #[must_use]
    pub fn language(&self) -> &str {
        &self.config.lng
    }

    #[must_use]
    pub const fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Returns true if `namespace` has any keys loaded for `locale`.
    #[must_use]
    pub fn has_resource_bundle(&self, locale: &str, namespace: &str) -> bool {
        self.keys.get(locale).is_some_and(|ns| ns.contains_key(namespace))
    }

    /// Translates `key`, which may carry an `ns:` prefix.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translates `key` and interpolates `args` into the result.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let (namespace, bare_key) = self.split_namespace(key);

        self.lookup(namespace, bare_key)
            .map_or_else(|| key.to_string(), |value| self.interpolate(value, args))
    }

    /// Translates the plural form of `key` selected by `count`.
    ///
    /// `count` is also available to the template as `{{count}}`.
    #[must_use]
    pub fn t_count(&self, key: &str, count: u64, args: &[(&str, &str)]) -> String {
        let (namespace, bare_key) = self.split_namespace(key);
        let count_text = count.to_string();
        let mut all_args = Vec::with_capacity(args.len() + 1);
        all_args.push(("count", count_text.as_str()));
        all_args.extend_from_slice(args);

        for locale in self.search_locales() {
            for suffix in plural::suffix_candidates(locale, count) {
                let plural_key = format!("{bare_key}{suffix}");
                if let Some(value) = self.lookup_in(locale, namespace, &plural_key) {
                    return self.interpolate(value, &all_args);
                }
            }
            if let Some(value) = self.lookup_in(locale, namespace, bare_key) {
                return self.interpolate(value, &all_args);
            }
        }

        key.to_string()
    }

    fn split_namespace<'a>(&'a self, key: &'a str) -> (&'a str, &'a str) {
        key.split_once(self.config.ns_separator.as_str())
            .filter(|(namespace, _)| !namespace.is_empty())
            .unwrap_or((self.config.default_ns.as_str(), key))
    }

    fn search_locales(&self) -> impl Iterator<Item = &str> {
        let fallback = Some(self.config.fallback_lng.as_str())
            .filter(|fallback| *fallback != self.config.lng);
        std::iter::once(self.config.lng.as_str()).chain(fallback)
    }

    fn lookup(&self, namespace: &str, key: &str) -> Option<&str> {
        self.search_locales().find_map(|locale| self.lookup_in(locale, namespace, key))
    }

    fn lookup_in(&self, locale: &str, namespace: &str, key: &str) -> Option<&str> {
        self.keys.get(locale)?.get(namespace)?.get(key).map(String::as_str)
    }

    fn interpolate(&self, template: &str, args: &[(&str, &str)]) -> String {
        let prefix = self.config.interpolation.prefix.as_str();
        let suffix = self.config.interpolation.suffix.as_str();

        let mut result = String::with_capacity(template.len());
        let mut rest = template;
        while let Some((before, after_prefix)) = rest.split_once(prefix) {
            let Some((name, after)) = after_prefix.split_once(suffix) else {
                break;
            };

            result.push_str(before);
            match args.iter().find(|(arg, _)| *arg == name.trim()) {
                Some((_, value)) => result.push_str(value),
                None => {
                    result.push_str(prefix);
                    result.push_str(name);
                    result.push_str(suffix);
                }
            }
            rest = after;
        }
        result.push_str(rest);
        result
    }
}
