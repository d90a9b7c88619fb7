//! The `RecordStore` trait.
//!
//! Implemented by persistence backends (e.g. `catalog-store-json`). The
//! harvester depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::record::Record;

/// Persisted snapshot of the whole catalog.
///
/// There are no partial writes: every save replaces the snapshot with the
/// full collection, and a failed save leaves the previous snapshot intact.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the last snapshot. A missing snapshot is an empty collection, not
  /// an error; an unreadable one is an error the caller may downgrade.
  fn load(&self) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// Atomically replace the snapshot with `records`, creating the storage
  /// location if needed.
  fn save<'a>(
    &'a self,
    records: &'a [Record],
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
