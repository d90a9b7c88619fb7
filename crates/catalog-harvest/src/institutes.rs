//! Loading the institute registry file.

use std::path::Path;

use catalog_core::institute::{Institute, validate_registry};

use crate::{Error, Result};

/// Read and validate the JSON institute registry at `path`.
///
/// An unreadable, malformed or empty registry is an error: without it a run
/// has nothing to do and must not touch the store.
pub async fn load_institutes(path: &Path) -> Result<Vec<Institute>> {
  let raw = tokio::fs::read(path).await.map_err(|source| Error::RegistryRead {
    path: path.to_owned(),
    source,
  })?;

  let institutes: Vec<Institute> =
    serde_json::from_slice(&raw).map_err(|source| Error::RegistryParse {
      path: path.to_owned(),
      source,
    })?;

  validate_registry(&institutes)?;
  Ok(institutes)
}
