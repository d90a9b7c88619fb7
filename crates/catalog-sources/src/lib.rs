//! Source adapters for the education catalog.
//!
//! Each institute publishes its documents on a board-style listing page with
//! its own markup and vocabulary. A [`SourceAdapter`] describes where the
//! rows, title links and date cells live on one such page, and carries the
//! keyword sets the normaliser uses for that source. The [`AdapterRegistry`]
//! picks the adapter for an institute by matching its display name.
//!
//! Extraction is pure and synchronous; fetching goes through the
//! [`ListingFetcher`] trait so tests can serve fixed pages.

pub mod adapter;
pub mod error;
pub mod fetch;
pub mod institutes;
pub mod listing;
pub mod registry;

pub use adapter::SourceAdapter;
pub use error::{Error, FetchError, Result};
pub use fetch::{HttpFetcher, ListingFetcher, fetch_listing};
pub use listing::{ListingExtraction, ListingSpec, RowError, RowFailure, RowOutcome, SkipReason};
pub use registry::AdapterRegistry;
