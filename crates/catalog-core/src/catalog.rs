//! [`Catalog`]: the in-memory, append-only record collection.
//!
//! The catalog enforces the identity invariant: no two records share the same
//! `(title, institute)` pair. It has a single owner for the length of a run;
//! admission checks and appends are never interleaved with other writers.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
  normalize::Candidate,
  record::{DocType, Record},
};

/// Result of offering a [`Candidate`] to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
  /// Appended under a freshly assigned id.
  Admitted { id: String },
  /// A record with the same title and institute already exists; skipped.
  Duplicate,
}

impl Admission {
  pub fn is_admitted(&self) -> bool { matches!(self, Self::Admitted { .. }) }
}

/// Ordered records plus the indexes used for admission and id assignment.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  records: Vec<Record>,
  /// institute name → title keys already present for it.
  titles:  HashMap<String, HashSet<String>>,
  ids:     HashSet<String>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }

  /// Build a catalog from a loaded snapshot, preserving its order.
  pub fn from_records(records: Vec<Record>) -> Self {
    let mut catalog = Self::new();
    for record in records {
      catalog.push(record);
    }
    catalog
  }

  pub fn records(&self) -> &[Record] { &self.records }

  pub fn into_records(self) -> Vec<Record> { self.records }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// `true` iff no record has both this `title` and this `institute`.
  ///
  /// Titles compare after trimming and collapsing inner whitespace, so a
  /// stored `"AI  수업"` and a harvested `"AI 수업"` are the same title.
  pub fn admits(&self, title: &str, institute: &str) -> bool {
    !self
      .titles
      .get(institute)
      .is_some_and(|titles| titles.contains(&title_key(title)))
  }

  /// A new id of the form `{institute_id}_{NNN}`, distinct from every id
  /// already in the catalog.
  pub fn assign_id(&self, institute_id: &str) -> String {
    let prefix = format!("{institute_id}_");
    let mut seq = self
      .records
      .iter()
      .filter(|r| r.id.starts_with(&prefix))
      .count()
      + 1;

    loop {
      let id = format!("{prefix}{seq:03}");
      if !self.ids.contains(&id) {
        return id;
      }
      seq += 1;
    }
  }

  /// Admit `candidate` if it is new, appending a record built from it.
  pub fn ingest(&mut self, candidate: Candidate) -> Admission {
    if !self.admits(&candidate.title, &candidate.institute) {
      return Admission::Duplicate;
    }

    let id = self.assign_id(&candidate.institute_id);
    self.push(Record {
      id:        id.clone(),
      title:     candidate.title,
      institute: candidate.institute,
      doc_type:  candidate.doc_type,
      year:      candidate.year,
      tags:      candidate.tags,
      url:       candidate.url,
      extra:     serde_json::Map::new(),
    });
    Admission::Admitted { id }
  }

  /// Record count per document type.
  pub fn count_by_type(&self) -> BTreeMap<DocType, usize> {
    let mut counts = BTreeMap::new();
    for record in &self.records {
      *counts.entry(record.doc_type.clone()).or_insert(0) += 1;
    }
    counts
  }

  fn push(&mut self, record: Record) {
    self
      .titles
      .entry(record.institute.clone())
      .or_default()
      .insert(title_key(&record.title));
    self.ids.insert(record.id.clone());
    self.records.push(record);
  }
}

fn title_key(title: &str) -> String {
  title.split_whitespace().collect::<Vec<_>>().join(" ")
}
