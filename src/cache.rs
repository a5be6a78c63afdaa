//! Single-slot memoization of the resolved config and its client.

use std::sync::Arc;

use crate::config::{
    ResolvedConfig,
    UserConfig,
};
use crate::payload::InitialPayload;

/// Inputs whose equality decides between reusing and rebuilding a client.
///
/// The payload and override are compared by identity (`Arc::ptr_eq`), the
/// locale by value. Two keys without an override match on that field.
///
/// The locale is the one reported by the router, so an empty and an absent
/// router locale are distinct keys even though they resolve alike.
#[derive(Debug, Clone)]
pub struct ResolutionKey {
    payload: Arc<InitialPayload>,
    locale: Option<String>,
    config_override: Option<Arc<UserConfig>>,
}

impl ResolutionKey {
    #[must_use]
    pub const fn new(
        payload: Arc<InitialPayload>,
        locale: Option<String>,
        config_override: Option<Arc<UserConfig>>,
    ) -> Self {
        Self { payload, locale, config_override }
    }

    #[must_use]
    pub const fn payload(&self) -> &Arc<InitialPayload> {
        &self.payload
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[must_use]
    pub const fn config_override(&self) -> Option<&Arc<UserConfig>> {
        self.config_override.as_ref()
    }

    /// Field-by-field comparison used by [`InstanceCache`].
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let same_override = match (&self.config_override, &other.config_override) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        Arc::ptr_eq(&self.payload, &other.payload) && self.locale == other.locale && same_override
    }
}

/// The single cached `(key, config, client)` triple.
#[derive(Debug, Clone)]
pub struct CacheEntry<C> {
    pub key: ResolutionKey,
    pub config: Arc<ResolvedConfig>,
    pub client: C,
}

/// Holds at most one [`CacheEntry`].
///
/// Not synchronized; wrap in a `Mutex` when shared so that the
/// compare-and-replace in [`InstanceCache::get_or_build`] stays atomic.
#[derive(Debug)]
pub struct InstanceCache<C> {
    entry: Option<CacheEntry<C>>,
}

impl<C> Default for InstanceCache<C> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<C: Clone> InstanceCache<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the stored pair when `key` matches the stored key, otherwise
    /// runs `build` and stores its result under `key`.
    ///
    /// A failing `build` leaves the previous entry in place.
    ///
    /// # Errors
    /// Propagates the error returned by `build` unchanged.
    pub fn get_or_build<E, F>(
        &mut self,
        key: ResolutionKey,
        build: F,
    ) -> Result<(Arc<ResolvedConfig>, C), E>
    where
        F: FnOnce() -> Result<(ResolvedConfig, C), E>,
    {
        if let Some(entry) = &self.entry
            && entry.key.matches(&key)
        {
            tracing::debug!("Reusing cached translation client for locale {:?}", key.locale);
            return Ok((Arc::clone(&entry.config), entry.client.clone()));
        }

        tracing::debug!("Building translation client for locale {:?}", key.locale);
        let (config, client) = build()?;
        let config = Arc::new(config);

        self.entry = Some(CacheEntry { key, config: Arc::clone(&config), client: client.clone() });

        Ok((config, client))
    }

    #[must_use]
    pub const fn entry(&self) -> Option<&CacheEntry<C>> {
        self.entry.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
