//! Field normaliser: pure mapping from raw listing text to record fields.
//!
//! Every inference here is a keyword-substring heuristic over the title or a
//! plain date parse. Nothing performs I/O and nothing fails: an unparseable
//! date yields [`Year::Unknown`].

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::{
  institute::Institute,
  record::{DocType, RawListingEntry, Year},
};

/// Date layouts tried in order, after `.` separators are rewritten to `-`.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d"];

/// Per-source keyword sets. Each institute's site has its own vocabulary, so
/// every source adapter carries one of these.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
  /// Title markers that make a record a [`DocType::Guide`], checked in order.
  pub guide_markers: &'static [&'static str],
  /// Topical keywords added as tags when they occur in the title.
  pub tag_keywords:  &'static [&'static str],
  /// Tags added to every record from this source.
  pub default_tags:  &'static [&'static str],
}

/// A listing entry with all inferred fields filled in, ready for admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
  pub title:        String,
  /// Institute display name, stored on the record.
  pub institute:    String,
  /// Institute slug, used as the id prefix.
  pub institute_id: String,
  pub doc_type:     DocType,
  pub year:         Year,
  pub tags:         BTreeSet<String>,
  pub url:          String,
}

/// `Guide` if any marker occurs in `title`, otherwise `Report`.
pub fn detect_type(title: &str, guide_markers: &[&str]) -> DocType {
  if guide_markers.iter().any(|marker| title.contains(marker)) {
    DocType::Guide
  } else {
    DocType::Report
  }
}

/// Four-digit year from a `YYYY-MM-DD` or `YYYY.MM.DD` date cell.
pub fn detect_year(date_text: Option<&str>) -> Year {
  let Some(text) = date_text else {
    return Year::Unknown;
  };
  let normalized = text.trim().replace('.', "-");

  DATE_LAYOUTS
    .iter()
    .find_map(|layout| NaiveDate::parse_from_str(&normalized, layout).ok())
    .and_then(|date| Year::from_calendar(date.year()))
    .unwrap_or(Year::Unknown)
}

/// Base tags `{region, institute id}` plus the source defaults plus every
/// keyword that occurs in `title`.
pub fn detect_tags(
  title: &str,
  institute: &Institute,
  vocabulary: &Vocabulary,
) -> BTreeSet<String> {
  [institute.region.as_str(), institute.id.as_str()]
    .into_iter()
    .chain(vocabulary.default_tags.iter().copied())
    .chain(
      vocabulary
        .tag_keywords
        .iter()
        .copied()
        .filter(|keyword| title.contains(keyword)),
    )
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Run every detector over `entry`.
pub fn normalize(
  entry: RawListingEntry,
  institute: &Institute,
  vocabulary: &Vocabulary,
) -> Candidate {
  let doc_type = detect_type(&entry.title, vocabulary.guide_markers);
  let year = detect_year(entry.date_text.as_deref());
  let tags = detect_tags(&entry.title, institute, vocabulary);

  Candidate {
    title: entry.title,
    institute: institute.name.clone(),
    institute_id: institute.id.clone(),
    doc_type,
    year,
    tags,
    url: entry.link,
  }
}
