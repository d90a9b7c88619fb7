//! The `SourceAdapter` trait.

use catalog_core::normalize::Vocabulary;
use url::Url;

use crate::{
  Error, Result,
  listing::{ListingExtraction, ListingSpec, extract_listing},
};

/// Per-institute knowledge of one listing page.
///
/// Adapters are registered with an [`AdapterRegistry`](crate::AdapterRegistry)
/// and selected by matching [`name_pattern`](Self::name_pattern) against the
/// institute's display name. Adding an institute means adding an adapter, not
/// editing a dispatcher.
pub trait SourceAdapter: Send + Sync {
  /// Substring of the institute display name this adapter serves.
  fn name_pattern(&self) -> &'static str;

  /// Page layout and locators.
  fn listing(&self) -> &ListingSpec;

  /// Keyword sets used when normalising this source's entries.
  fn vocabulary(&self) -> &Vocabulary;

  /// Parse an institute base URL.
  fn base_url(&self, raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|source| Error::InvalidBaseUrl {
      url: raw.to_owned(),
      source,
    })
  }

  /// The listing page: the listing path appended to the base URL.
  fn listing_url(&self, base: &Url) -> Result<Url> {
    let raw = format!(
      "{}{}",
      base.as_str().trim_end_matches('/'),
      self.listing().path
    );
    Url::parse(&raw).map_err(|source| Error::InvalidBaseUrl { url: raw, source })
  }

  /// Turn the listing page fetched from `page` into entries.
  fn extract(&self, html: &str, page: &Url) -> Result<ListingExtraction> {
    extract_listing(html, self.listing(), page)
  }
}
