//! Error types for `catalog-sources`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid base url {url:?}: {source}")]
  InvalidBaseUrl {
    url:    String,
    #[source]
    source: url::ParseError,
  },

  #[error("invalid selector {selector:?}: {message}")]
  InvalidSelector { selector: String, message: String },

  #[error("fetch failed: {0}")]
  Fetch(#[from] FetchError),

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

/// Why a listing page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("{url} → HTTP {status}")]
  Status { url: String, status: u16 },

  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
