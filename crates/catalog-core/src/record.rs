//! Record types: the persisted unit of the catalog.
//!
//! A record is created once when a listing entry is admitted and is never
//! updated afterwards. Its identity for deduplication is the pair
//! `(title, institute)`; the `id` is only a stable handle.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

// ─── Document type ───────────────────────────────────────────────────────────

/// The kind of document a record points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
  /// Research report; the default when no guide marker is found.
  Report,
  /// Teaching guide, lesson plan or instructional material.
  Guide,
  /// Any other kind found in a snapshot, kept verbatim.
  #[serde(untagged)]
  Other(String),
}

impl DocType {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Report => "report",
      Self::Guide => "guide",
      Self::Other(s) => s,
    }
  }
}

impl fmt::Display for DocType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Year ────────────────────────────────────────────────────────────────────

/// Text stored in place of a year when no date could be parsed.
pub const UNKNOWN_YEAR: &str = "unknown";

/// Publication year, or an explicit sentinel when it could not be inferred.
///
/// Serialised as text: `"2025"` or `"unknown"`. Older snapshots stored the
/// year as a JSON number; those are still accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Year {
  Known(u16),
  Unknown,
}

impl Year {
  /// A four-digit calendar year, or `None` outside `1000..=9999`.
  pub fn from_calendar(year: i32) -> Option<Self> {
    (1000..=9999)
      .contains(&year)
      .then(|| Self::Known(year as u16))
  }
}

impl fmt::Display for Year {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Known(y) => write!(f, "{y:04}"),
      Self::Unknown => f.write_str(UNKNOWN_YEAR),
    }
  }
}

impl FromStr for Year {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s == UNKNOWN_YEAR {
      return Ok(Self::Unknown);
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
      let n: i32 = s.parse().map_err(|_| Error::InvalidYear(s.to_owned()))?;
      return Self::from_calendar(n).ok_or_else(|| Error::InvalidYear(s.to_owned()));
    }
    Err(Error::InvalidYear(s.to_owned()))
  }
}

impl Serialize for Year {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Year {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Number(i64),
      Text(String),
    }

    match Raw::deserialize(deserializer)? {
      Raw::Number(n) => i32::try_from(n)
        .ok()
        .and_then(Year::from_calendar)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid year: {n}"))),
      Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
  }
}

// ─── Listing entry ───────────────────────────────────────────────────────────

/// One row of a listing page as extracted by a source adapter.
///
/// Lives only between extraction and normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListingEntry {
  /// Whitespace-trimmed display text; never empty.
  pub title:     String,
  /// Absolute link, already resolved against the institute base URL.
  pub link:      String,
  /// Unparsed date cell, if the listing has one.
  pub date_text: Option<String>,
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A catalog entry. The field set and names are the snapshot contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
  pub id:        String,
  pub title:     String,
  pub institute: String,
  #[serde(rename = "type")]
  pub doc_type:  DocType,
  pub year:      Year,
  pub tags:      BTreeSet<String>,
  pub url:       String,
  /// Hand-curated fields (e.g. `subject`, `grade`) preserved across saves.
  #[serde(flatten)]
  pub extra:     serde_json::Map<String, serde_json::Value>,
}
