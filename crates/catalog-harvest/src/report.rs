//! Per-run outcomes: one entry per institute plus catalog totals.

use std::collections::BTreeMap;

use catalog_core::record::DocType;

/// Row and admission counts for one institute's listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestTally {
  /// Rows examined on the listing page, header rows excluded.
  pub rows:       usize,
  pub admitted:   usize,
  pub duplicates: usize,
  /// Rows without a usable title or link.
  pub skipped:    usize,
  /// Rows that failed extraction.
  pub failed:     usize,
}

/// What happened to one institute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstituteOutcome {
  Harvested(IngestTally),
  /// No registered adapter matches the institute name.
  NoAdapter,
  /// The listing could not be fetched or read; zero entries.
  Unavailable { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstituteReport {
  pub institute: String,
  pub outcome:   InstituteOutcome,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
  /// One entry per registry institute, in registry order.
  pub institutes:    Vec<InstituteReport>,
  /// Store size before the run.
  pub initial_total: usize,
  /// Store size after the run, as saved.
  pub total:         usize,
  pub by_type:       BTreeMap<DocType, usize>,
}

impl RunReport {
  fn tallies(&self) -> impl Iterator<Item = &IngestTally> {
    self.institutes.iter().filter_map(|r| match &r.outcome {
      InstituteOutcome::Harvested(tally) => Some(tally),
      _ => None,
    })
  }

  pub fn admitted(&self) -> usize { self.tallies().map(|t| t.admitted).sum() }

  pub fn duplicates(&self) -> usize { self.tallies().map(|t| t.duplicates).sum() }

  pub fn failed_rows(&self) -> usize { self.tallies().map(|t| t.failed).sum() }

  /// Institutes whose listing could not be fetched.
  pub fn unavailable(&self) -> usize {
    self
      .institutes
      .iter()
      .filter(|r| matches!(r.outcome, InstituteOutcome::Unavailable { .. }))
      .count()
  }

  pub fn outcome_for(&self, institute: &str) -> Option<&InstituteOutcome> {
    self
      .institutes
      .iter()
      .find(|r| r.institute == institute)
      .map(|r| &r.outcome)
  }
}
