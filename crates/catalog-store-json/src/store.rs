//! [`JsonFileStore`]: the JSON file implementation of [`RecordStore`].

use std::{
  ffi::OsString,
  io::ErrorKind,
  path::{Path, PathBuf},
};

use catalog_core::{record::Record, store::RecordStore};
use tokio::{fs, io::AsyncWriteExt as _};

use crate::{
  encode::{decode_snapshot, encode_snapshot},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A catalog snapshot stored in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  /// A store at `path`. Nothing is touched until the first load or save.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  /// Sibling file the next snapshot is written to before the rename.
  pub(crate) fn staging_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map(OsString::from)
      .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    self.path.with_file_name(name)
  }

  async fn ensure_parent(&self) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent)
        .await
        .map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for JsonFileStore {
  type Error = Error;

  async fn load(&self) -> Result<Vec<Record>> {
    let bytes = match fs::read(&self.path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => return Err(Error::io(&self.path, e)),
    };
    decode_snapshot(&bytes)
  }

  async fn save(&self, records: &[Record]) -> Result<()> {
    self.ensure_parent().await?;

    let body = encode_snapshot(records)?;
    let staging = self.staging_path();

    let written = match write_staged(&staging, &body).await {
      Ok(()) => fs::rename(&staging, &self.path)
        .await
        .map_err(|e| Error::io(&self.path, e)),
      Err(e) => Err(e),
    };
    if written.is_err() {
      // Best effort; the write or rename error is the one reported.
      let _ = fs::remove_file(&staging).await;
    }
    written
  }
}

async fn write_staged(staging: &Path, body: &[u8]) -> Result<()> {
  let mut file = fs::File::create(staging)
    .await
    .map_err(|e| Error::io(staging, e))?;
  file
    .write_all(body)
    .await
    .map_err(|e| Error::io(staging, e))?;
  file.sync_all().await.map_err(|e| Error::io(staging, e))
}
