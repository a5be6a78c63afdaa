//! Server-computed translation payload handed to every render.

use serde::{
    Deserialize,
    Serialize,
};

use crate::config::UserConfig;
use crate::resources::ResourceStore;

/// Per-page payload produced on the server.
///
/// Wrapped in an `Arc` by callers; the instance cache keys on that `Arc`'s
/// identity, so a payload that is rebuilt (new navigation) invalidates the
/// cached client even if its contents are equal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialPayload {
    pub user_config: Option<UserConfig>,
    #[serde(rename = "initialI18nStore")]
    pub initial_resource_store: ResourceStore,
    pub initial_locale: Option<String>,
}

impl InitialPayload {
    #[must_use]
    pub const fn new(
        user_config: Option<UserConfig>,
        initial_resource_store: ResourceStore,
        initial_locale: Option<String>,
    ) -> Self {
        Self { user_config, initial_resource_store, initial_locale }
    }
}
