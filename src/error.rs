use thiserror::Error;

use crate::client::ClientBuildError;
use crate::config::ConfigError;

/// Errors surfaced by a render. Both kinds are configuration mistakes and
/// are never retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ClientBuild(#[from] ClientBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
