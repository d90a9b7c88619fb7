//! Error type for `catalog-harvest`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read institute registry {path:?}: {source}")]
  RegistryRead {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed institute registry {path:?}: {source}")]
  RegistryParse {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid institute registry: {0}")]
  Registry(#[from] catalog_core::Error),

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("source error: {0}")]
  Source(#[from] catalog_sources::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
