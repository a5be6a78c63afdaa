//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    UserConfig,
};

/// プロジェクトルートに置く設定ファイル名
pub const CONFIG_FILE_NAME: &str = "i18n.config.json";

/// ディレクトリからユーザー設定を読み込む
///
/// `i18n.config.json` ファイルを探して読み込む
///
/// # Arguments
/// * `project_root` - プロジェクトのルートパス
///
/// # Returns
/// - `Ok(Some(config))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_from_dir(project_root: &Path) -> Result<Option<UserConfig>, ConfigError> {
    let config_path = project_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let config: UserConfig = serde_json::from_str(&content)?;

    Ok(Some(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_dir`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_dir_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"i18n": {"defaultLocale": "en", "locales": ["en", "ja"]}}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        let config = result.unwrap().unwrap();
        let i18n = config.i18n.unwrap();
        assert_eq!(i18n.default_locale.as_deref(), Some("en"));
        assert_eq!(i18n.locales, vec!["en", "ja"]);
    }

    /// `load_from_dir`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_dir_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_dir`: JSON パースエラー
    #[rstest]
    fn test_load_from_dir_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_dir(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_dir`: i18n が無くても読み込み自体は成功する（検証は resolve 側）
    #[rstest]
    fn test_load_from_dir_without_i18n() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"debug": true}"#).unwrap();

        let config = load_from_dir(temp_dir.path()).unwrap().unwrap();

        assert!(config.i18n.is_none());
        assert!(config.debug);
    }
}
