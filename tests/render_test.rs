//! レンダリング単位での設定解決とクライアント再利用に関するテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::sync::{
    Arc,
    Mutex,
    PoisonError,
};

use pretty_assertions::assert_eq;
use ssr_i18n::config::{
    CONFIG_FILE_NAME,
    ConfigError,
    load_from_dir,
};
use ssr_i18n::payload::InitialPayload;
use ssr_i18n::{
    AppTranslation,
    Error,
    NoopProvider,
    RenderProps,
    client::DefaultClientFactory,
    global,
};
use tempfile::TempDir;

/// 公開状態はプロセス全体で共有されるため、テストを直列化する
static GLOBAL_STATE: Mutex<()> = Mutex::new(());

fn server_payload(locale: &str) -> Arc<InitialPayload> {
    let json = format!(
        r#"{{
            "userConfig": {{
                "i18n": {{"defaultLocale": "en", "locales": ["en", "fr"]}},
                "defaultNS": "common"
            }},
            "initialI18nStore": {{
                "en": {{"common": {{"title": "Welcome, {{{{name}}}}", "cart_one": "{{{{count}}}} item", "cart_other": "{{{{count}}}} items"}}}},
                "fr": {{"common": {{"title": "Bienvenue, {{{{name}}}}"}}}}
            }},
            "initialLocale": "{locale}"
        }}"#
    );
    Arc::new(serde_json::from_str(&json).unwrap())
}

#[test]
fn test_navigation_reuses_client_until_inputs_change() {
    let _guard = GLOBAL_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    let app = AppTranslation::new(DefaultClientFactory, None);
    let page = server_payload("fr");

    // 同じページの再レンダリングはキャッシュヒット
    let first = app.render(&RenderProps::new(Arc::clone(&page), None), &mut NoopProvider).unwrap();
    let rerender =
        app.render(&RenderProps::new(Arc::clone(&page), None), &mut NoopProvider).unwrap();

    assert_eq!(first.config.lng, "fr");
    assert_eq!(first.remount_key, "fr");
    assert!(Arc::ptr_eq(&first.client, &rerender.client));
    assert_eq!(first.client.t_with("title", &[("name", "Ada")]), "Bienvenue, Ada");
    // fr に無いキーは defaultLocale にフォールバック
    assert_eq!(first.client.t_count("cart", 2, &[]), "2 items");

    // 新しいページ（別の payload）では再構築される
    let next_page = server_payload("fr");
    let navigated =
        app.render(&RenderProps::new(next_page, Some("en".to_string())), &mut NoopProvider).unwrap();

    assert!(!Arc::ptr_eq(&first.client, &navigated.client));
    assert_eq!(navigated.client.t_count("cart", 1, &[]), "1 item");

    let published = global::published().unwrap();
    assert!(Arc::ptr_eq(&published.client, &navigated.client));
    assert!(Arc::ptr_eq(&published.config, &navigated.config));
}

#[test]
fn test_loaded_config_as_override() {
    let _guard = GLOBAL_STATE.lock().unwrap_or_else(PoisonError::into_inner);
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        r#"{"i18n": {"defaultLocale": "fr", "locales": ["fr"]}, "fallbackLng": "en"}"#,
    )
    .unwrap();
    let config_override = load_from_dir(temp_dir.path()).unwrap().map(Arc::new);

    let app = AppTranslation::new(DefaultClientFactory, config_override);
    let page = Arc::new(InitialPayload::default());

    let output = app.render(&RenderProps::new(page, None), &mut NoopProvider).unwrap();

    assert_eq!(output.config.default_locale, "fr");
    assert_eq!(output.config.fallback_lng, "en");
    assert_eq!(output.client.t("missing"), "missing");
}

#[test]
fn test_missing_default_locale_is_reported() {
    let payload: InitialPayload =
        serde_json::from_str(r#"{"userConfig": {"i18n": {}}}"#).unwrap();
    let app = AppTranslation::new(DefaultClientFactory, None);

    let result = app.render(&RenderProps::new(Arc::new(payload), None), &mut NoopProvider);

    let Err(error) = result else {
        panic!("expected an error");
    };
    assert!(matches!(error, Error::Config(ConfigError::MissingDefaultLocale)));
    assert_eq!(error.to_string(), "config.i18n does not include a defaultLocale property");
}
