//! Process-wide publication of the latest resolved config and client.
//!
//! Uninitialized until the first successful render, then overwritten by every
//! render. Prefer the values returned from `AppTranslation::render`; this cell
//! exists for code that cannot receive them explicitly.

use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use crate::client::TranslationClient;
use crate::config::ResolvedConfig;

/// The config/client pair published by the latest render.
#[derive(Debug, Clone)]
pub struct Published {
    pub config: Arc<ResolvedConfig>,
    pub client: Arc<TranslationClient>,
}

static PUBLISHED: RwLock<Option<Published>> = RwLock::new(None);

/// Replaces the published pair.
pub fn publish(config: Arc<ResolvedConfig>, client: Arc<TranslationClient>) {
    let mut published = PUBLISHED.write().unwrap_or_else(PoisonError::into_inner);
    *published = Some(Published { config, client });
}

/// Returns the published pair as one consistent snapshot.
#[must_use]
pub fn published() -> Option<Published> {
    PUBLISHED.read().unwrap_or_else(PoisonError::into_inner).clone()
}

#[must_use]
pub fn global_config() -> Option<Arc<ResolvedConfig>> {
    published().map(|published| published.config)
}

#[must_use]
pub fn global_client() -> Option<Arc<TranslationClient>> {
    published().map(|published| published.client)
}
