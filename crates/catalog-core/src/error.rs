//! Error types for `catalog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("institute registry is empty")]
  EmptyRegistry,

  #[error("institute #{index} has an empty `{field}`")]
  EmptyInstituteField { index: usize, field: &'static str },

  #[error("duplicate institute id: {0:?}")]
  DuplicateInstituteId(String),

  #[error("invalid year value: {0:?}")]
  InvalidYear(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
