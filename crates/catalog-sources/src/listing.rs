//! Listing-page extraction.
//!
//! A listing is a table whose rows each describe one document. Extraction
//! walks the rows, pulls the title link and optional date cell out of each,
//! and classifies every row as extracted, skipped or failed. A failing row
//! never affects its neighbours.

use catalog_core::record::RawListingEntry;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

use crate::{Error, Result};

/// Longest row excerpt kept for diagnostics.
const SNIPPET_CHARS: usize = 80;

// ─── Spec ────────────────────────────────────────────────────────────────────

/// Where the data lives on one institute's listing page.
#[derive(Debug, Clone, Copy)]
pub struct ListingSpec {
  /// Path (and query) appended to the institute base URL.
  pub path:          &'static str,
  /// CSS selector matching one element per listing row.
  pub row_selector:  &'static str,
  /// CSS selector, relative to a row, for the title anchor.
  pub link_selector: &'static str,
  /// CSS selector, relative to a row, for the date cell.
  pub date_selector: Option<&'static str>,
  /// Leading rows that are table headers rather than entries.
  pub header_rows:   usize,
}

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// Why a row produced no entry without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// The row has no title anchor (notice rows, "no posts" rows, spacers).
  NoTitleLink,
  EmptyTitle,
  EmptyLink,
}

/// A row that looked like an entry but could not be turned into one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
  #[error("title anchor has no href")]
  MissingHref,

  #[error("cannot resolve link {href:?}: {source}")]
  InvalidLink {
    href:   String,
    #[source]
    source: url::ParseError,
  },

  #[error("unsupported link scheme {scheme:?} in {href:?}")]
  UnsupportedScheme { href: String, scheme: String },
}

/// The outcome of extracting a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
  Extracted(RawListingEntry),
  Skipped(SkipReason),
  Failed(RowError),
}

/// A failed row with enough context to find it on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
  /// Zero-based row index, counted after header rows.
  pub row:     usize,
  pub error:   RowError,
  /// Start of the row's visible text.
  pub snippet: String,
}

/// Everything one listing page yielded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingExtraction {
  pub entries:  Vec<RawListingEntry>,
  pub skipped:  usize,
  pub failures: Vec<RowFailure>,
}

impl ListingExtraction {
  /// Rows examined, whatever their outcome.
  pub fn rows(&self) -> usize {
    self.entries.len() + self.skipped + self.failures.len()
  }
}

// ─── Extraction ──────────────────────────────────────────────────────────────

struct Locators {
  row:  Selector,
  link: Selector,
  date: Option<Selector>,
}

impl Locators {
  fn compile(spec: &ListingSpec) -> Result<Self> {
    Ok(Self {
      row:  compile_selector(spec.row_selector)?,
      link: compile_selector(spec.link_selector)?,
      date: spec.date_selector.map(compile_selector).transpose()?,
    })
  }
}

fn compile_selector(selector: &str) -> Result<Selector> {
  Selector::parse(selector).map_err(|e| Error::InvalidSelector {
    selector: selector.to_owned(),
    message:  e.to_string(),
  })
}

/// Extract every row of `html` described by `spec`. Links resolve against
/// `page`, the address the listing was fetched from.
pub fn extract_listing(
  html: &str,
  spec: &ListingSpec,
  page: &Url,
) -> Result<ListingExtraction> {
  let locators = Locators::compile(spec)?;
  let document = Html::parse_document(html);
  let mut extraction = ListingExtraction::default();

  let rows = document.select(&locators.row).skip(spec.header_rows);
  for (index, row) in rows.enumerate() {
    match extract_row(row, &locators, page) {
      RowOutcome::Extracted(entry) => extraction.entries.push(entry),
      RowOutcome::Skipped(_) => extraction.skipped += 1,
      RowOutcome::Failed(error) => extraction.failures.push(RowFailure {
        row: index,
        error,
        snippet: snippet(row),
      }),
    }
  }

  Ok(extraction)
}

fn extract_row(row: ElementRef<'_>, locators: &Locators, page: &Url) -> RowOutcome {
  let Some(anchor) = row.select(&locators.link).next() else {
    return RowOutcome::Skipped(SkipReason::NoTitleLink);
  };

  let title = collapse_ws(anchor.text());
  if title.is_empty() {
    return RowOutcome::Skipped(SkipReason::EmptyTitle);
  }

  let Some(href) = anchor.value().attr("href") else {
    return RowOutcome::Failed(RowError::MissingHref);
  };
  let href = href.trim();
  if href.is_empty() {
    return RowOutcome::Skipped(SkipReason::EmptyLink);
  }

  let link = match resolve_link(page, href) {
    Ok(link) => link,
    Err(e) => return RowOutcome::Failed(e),
  };

  let date_text = locators
    .date
    .as_ref()
    .and_then(|selector| row.select(selector).next())
    .map(|cell| collapse_ws(cell.text()))
    .filter(|text| !text.is_empty());

  RowOutcome::Extracted(RawListingEntry { title, link, date_text })
}

/// Resolve `href` against `page`; only http(s) targets are accepted.
pub fn resolve_link(page: &Url, href: &str) -> Result<String, RowError> {
  let url = page.join(href).map_err(|source| RowError::InvalidLink {
    href: href.to_owned(),
    source,
  })?;

  match url.scheme() {
    "http" | "https" => Ok(url.into()),
    scheme => Err(RowError::UnsupportedScheme {
      href:   href.to_owned(),
      scheme: scheme.to_owned(),
    }),
  }
}

/// Join text nodes, collapsing whitespace runs to one space and trimming.
fn collapse_ws<'a>(parts: impl Iterator<Item = &'a str>) -> String {
  let mut out = String::new();
  for word in parts.flat_map(str::split_whitespace) {
    if !out.is_empty() {
      out.push(' ');
    }
    out.push_str(word);
  }
  out
}

fn snippet(row: ElementRef<'_>) -> String {
  collapse_ws(row.text()).chars().take(SNIPPET_CHARS).collect()
}
