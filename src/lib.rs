//! ssr-i18n
//!
//! サーバーレンダリングされるアプリ向けに、翻訳設定を解決し翻訳クライアントをメモ化する

pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod global;
pub mod payload;
pub mod resources;

mod test_utils;

pub use app::{
    AppTranslation,
    NoopProvider,
    RenderOutput,
    RenderProps,
    TranslationProvider,
};
pub use error::{
    Error,
    Result,
};
