//! Translation resource store shipped with the server payload.

use std::collections::{
    BTreeMap,
    HashMap,
};

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// Resource bundles keyed by locale, then namespace.
///
/// Mirrors the JSON shape of an i18next store:
/// `{"en": {"common": {"hello": "Hello"}}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResourceStore {
    bundles: BTreeMap<String, BTreeMap<String, Value>>,
}

impl ResourceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the bundle for `locale`/`namespace`.
    pub fn insert(&mut self, locale: impl Into<String>, namespace: impl Into<String>, bundle: Value) {
        self.bundles.entry(locale.into()).or_default().insert(namespace.into(), bundle);
    }

    #[must_use]
    pub fn bundle(&self, locale: &str, namespace: &str) -> Option<&Value> {
        self.bundles.get(locale)?.get(namespace)
    }

    /// Locales present in the store, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Namespaces loaded for `locale`, in sorted order.
    pub fn namespaces<'a>(&'a self, locale: &str) -> impl Iterator<Item = &'a str> {
        self.bundles.get(locale).into_iter().flat_map(|ns| ns.keys().map(String::as_str))
    }

    /// Iterates `(locale, namespace, bundle)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Value)> {
        self.bundles.iter().flat_map(|(locale, namespaces)| {
            namespaces.iter().map(move |(ns, bundle)| (locale.as_str(), ns.as_str(), bundle))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.values().all(BTreeMap::is_empty)
    }
}

/// Flatten nested JSON object into separator-joined key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ssr_i18n::resources::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        Value::Null => {}
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}
