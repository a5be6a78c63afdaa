//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
};

use crate::config::{
    I18nLocaleSettings,
    UserConfig,
};
use crate::payload::InitialPayload;
use crate::resources::ResourceStore;

/// グローバル状態に触れるテストを直列化するためのロック
static GLOBAL_STATE_LOCK: Mutex<()> = Mutex::new(());

/// グローバル状態のロックを取得する
///
/// 公開済みの config/client を検証するテストは、このガードを保持したまま実行する。
pub(crate) fn lock_global_state() -> MutexGuard<'static, ()> {
    GLOBAL_STATE_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// テスト用の `UserConfig` を作成する
///
/// # Arguments
/// * `default_locale` - デフォルトロケール（例: "en"）
pub(crate) fn user_config(default_locale: &str) -> UserConfig {
    UserConfig {
        i18n: Some(I18nLocaleSettings {
            default_locale: Some(default_locale.to_string()),
            locales: vec!["en".to_string(), "fr".to_string()],
        }),
        ..UserConfig::default()
    }
}

/// テスト用の `InitialPayload` を作成する
///
/// 呼び出すたびに新しい `Arc` を返すため、キャッシュからは別ページとして扱われる。
pub(crate) fn payload(user_config: Option<UserConfig>) -> Arc<InitialPayload> {
    let resources: ResourceStore = serde_json::from_value(serde_json::json!({
        "en": {"common": {"hello": "Hello"}},
        "fr": {"common": {"hello": "Bonjour"}}
    }))
    .unwrap_or_default();

    Arc::new(InitialPayload::new(user_config, resources, None))
}
