//! User configuration: types, resolution, defaults and file loading.
/// Pass-through defaults for resolved configs
mod defaults;
/// Config file loader
mod loader;
/// Config resolution (override selection, effective locale)
mod resolver;
/// Configuration types and errors
mod types;

pub use defaults::create_config;
pub use loader::{
    CONFIG_FILE_NAME,
    load_from_dir,
};
pub use resolver::{
    effective_locale,
    resolve,
};
pub use types::{
    ConfigError,
    I18nLocaleSettings,
    InterpolationConfig,
    ResolvedConfig,
    UserConfig,
    ValidationError,
};
