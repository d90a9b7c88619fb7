//! Core types and trait definitions for the education catalog.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! Extraction, persistence and orchestration crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod institute;
pub mod normalize;
pub mod record;
pub mod store;

pub use error::{Error, Result};
