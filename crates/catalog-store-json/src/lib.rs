//! JSON file backend for the education catalog.
//!
//! The whole collection lives in one pretty-printed JSON array. Saves go to a
//! sibling staging file that is renamed over the snapshot, so a failed run
//! never leaves a half-written file behind.

mod encode;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonFileStore;

#[cfg(test)]
mod tests;
