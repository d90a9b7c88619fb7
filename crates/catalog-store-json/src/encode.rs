//! Snapshot (de)serialisation.
//!
//! Records are written as a JSON array with two-space indentation, one object
//! per record, non-ASCII text left unescaped so diffs stay readable.

use catalog_core::record::Record;

use crate::{Error, Result};

pub fn encode_snapshot(records: &[Record]) -> Result<Vec<u8>> {
  let mut out = serde_json::to_vec_pretty(records)?;
  out.push(b'\n');
  Ok(out)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<Vec<Record>> {
  serde_json::from_slice(bytes).map_err(Error::Malformed)
}
