//! Per-render entry point: payload in, resolved config and client out.

use std::sync::{
    Arc,
    Mutex,
    PoisonError,
};

use crate::cache::{
    InstanceCache,
    ResolutionKey,
};
use crate::client::{
    ClientFactory,
    TranslationClient,
};
use crate::config::{
    ResolvedConfig,
    UserConfig,
    resolve,
};
use crate::error::Result;
use crate::global;
use crate::payload::InitialPayload;

/// Hands the current client to descendants for the duration of one render.
pub trait TranslationProvider {
    fn provide(&mut self, client: &Arc<TranslationClient>);
}

/// Provider for renders with no descendants to feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProvider;

impl TranslationProvider for NoopProvider {
    fn provide(&mut self, _client: &Arc<TranslationClient>) {}
}

/// Inputs of one render.
#[derive(Debug, Clone)]
pub struct RenderProps {
    pub payload: Arc<InitialPayload>,
    /// Locale reported by the router, if any.
    pub locale: Option<String>,
}

impl RenderProps {
    #[must_use]
    pub const fn new(payload: Arc<InitialPayload>, locale: Option<String>) -> Self {
        Self { payload, locale }
    }
}

/// Result of one render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub config: Arc<ResolvedConfig>,
    pub client: Arc<TranslationClient>,
    /// Key the wrapped component is mounted under, so that a locale change
    /// remounts it.
    pub remount_key: String,
}

/// Resolves configuration and memoizes the translation client across renders.
///
/// A rebuild happens only when the payload `Arc`, the router locale, or the
/// override `Arc` changes.
#[derive(Debug)]
pub struct AppTranslation<F> {
    factory: F,
    config_override: Option<Arc<UserConfig>>,
    cache: Mutex<InstanceCache<Arc<TranslationClient>>>,
}

impl<F: ClientFactory> AppTranslation<F> {
    #[must_use]
    pub const fn new(factory: F, config_override: Option<Arc<UserConfig>>) -> Self {
        Self { factory, config_override, cache: Mutex::new(InstanceCache::new()) }
    }

    #[must_use]
    pub const fn config_override(&self) -> Option<&Arc<UserConfig>> {
        self.config_override.as_ref()
    }

    /// Replaces the override. The next render rebuilds the client.
    pub fn set_config_override(&mut self, config_override: Option<Arc<UserConfig>>) {
        self.config_override = config_override;
    }

    /// Runs one render: resolves (or reuses) the config and client, publishes
    /// them process-wide and hands the client to `provider`.
    ///
    /// # Errors
    /// - `Error::Config`: no usable config, see [`resolve`]
    /// - `Error::ClientBuild`: malformed resource store
    pub fn render<P>(&self, props: &RenderProps, provider: &mut P) -> Result<RenderOutput>
    where
        P: TranslationProvider + ?Sized,
    {
        let key = ResolutionKey::new(
            Arc::clone(&props.payload),
            props.locale.clone(),
            self.config_override.clone(),
        );

        let (config, client) = {
            // Held across the build and the publication so the published pair
            // always matches the cache slot.
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            let (config, client) = cache.get_or_build(key, || self.build(props))?;
            global::publish(Arc::clone(&config), Arc::clone(&client));
            (config, client)
        };

        provider.provide(&client);

        let remount_key = props
            .locale
            .clone()
            .filter(|locale| !locale.is_empty())
            .unwrap_or_else(|| config.lng.clone());

        Ok(RenderOutput { config, client, remount_key })
    }

    fn build(&self, props: &RenderProps) -> Result<(ResolvedConfig, Arc<TranslationClient>)> {
        let payload = &props.payload;
        let config = resolve(
            payload.user_config.as_ref(),
            self.config_override.as_deref(),
            props.locale.as_deref(),
            payload.initial_locale.as_deref(),
        )?;
        let client = self.factory.build(&config, &payload.initial_resource_store)?;

        Ok((config, Arc::new(client)))
    }
}
