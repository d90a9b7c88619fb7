//! Institute: an external organisation whose listing pages are harvested.
//!
//! Institutes come from an external registry file and are never mutated by
//! the catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One entry of the institute registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institute {
  /// Short stable slug, unique within the registry.
  pub id:     String,
  /// Display name. Used for adapter dispatch and stored on every record.
  pub name:   String,
  /// Free-text region label; becomes a default tag.
  pub region: String,
  /// Base address the adapter's listing path is appended to.
  pub url:    String,
}

/// A registry is usable as long as it lists at least one institute.
pub fn validate_registry(institutes: &[Institute]) -> Result<()> {
  if institutes.is_empty() {
    return Err(Error::EmptyRegistry);
  }
  Ok(())
}

/// Per-entry defects: blank required fields and repeated ids.
///
/// None of these stop a run. An entry with a blank `url` fails at its own
/// listing fetch, and a blank `name` matches no adapter.
pub fn registry_problems(institutes: &[Institute]) -> Vec<Error> {
  let mut problems = Vec::new();
  let mut seen = HashSet::new();
  for (index, institute) in institutes.iter().enumerate() {
    for (field, value) in [
      ("id", &institute.id),
      ("name", &institute.name),
      ("url", &institute.url),
    ] {
      if value.trim().is_empty() {
        problems.push(Error::EmptyInstituteField { index, field });
      }
    }
    if !institute.id.trim().is_empty() && !seen.insert(institute.id.as_str()) {
      problems.push(Error::DuplicateInstituteId(institute.id.clone()));
    }
  }
  problems
}
