//! [`Harvester`]: the run loop.

use catalog_core::{
  catalog::{Admission, Catalog},
  institute::{Institute, registry_problems, validate_registry},
  normalize::normalize,
  store::RecordStore,
};
use catalog_sources::{AdapterRegistry, ListingFetcher, fetch_listing};

use crate::{
  Error, PolitenessDelay, Result,
  report::{IngestTally, InstituteOutcome, InstituteReport, RunReport},
};

/// Sequential harvester: one institute at a time, one catalog owner, one save.
pub struct Harvester<F, S> {
  fetcher:  F,
  store:    S,
  adapters: AdapterRegistry,
  delay:    PolitenessDelay,
}

impl<F, S> Harvester<F, S>
where
  F: ListingFetcher,
  S: RecordStore,
{
  /// A harvester with the built-in adapters and the default delay.
  pub fn new(fetcher: F, store: S) -> Self {
    Self {
      fetcher,
      store,
      adapters: AdapterRegistry::builtin(),
      delay: PolitenessDelay::default(),
    }
  }

  pub fn with_adapters(mut self, adapters: AdapterRegistry) -> Self {
    self.adapters = adapters;
    self
  }

  pub fn with_delay(mut self, delay: PolitenessDelay) -> Self {
    self.delay = delay;
    self
  }

  /// Harvest every institute in registry order and save the catalog once.
  ///
  /// Fails without touching the store if `institutes` is empty; fails after
  /// harvesting if the save fails, leaving the previous snapshot in place.
  /// Defective entries are logged and harvested like any other.
  pub async fn run(&self, institutes: &[Institute]) -> Result<RunReport> {
    validate_registry(institutes)?;
    for problem in registry_problems(institutes) {
      tracing::warn!(%problem, "institute registry entry is incomplete");
    }

    let mut catalog = self.load_catalog().await;
    let mut report = RunReport {
      initial_total: catalog.len(),
      ..RunReport::default()
    };

    for (index, institute) in institutes.iter().enumerate() {
      if index > 0 {
        self.delay.pause().await;
      }
      let outcome = self.harvest_institute(institute, &mut catalog).await;
      report.institutes.push(InstituteReport {
        institute: institute.name.clone(),
        outcome,
      });
    }

    self
      .store
      .save(catalog.records())
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    report.total = catalog.len();
    report.by_type = catalog.count_by_type();

    tracing::info!(
      admitted = report.admitted(),
      duplicates = report.duplicates(),
      failed_rows = report.failed_rows(),
      unavailable = report.unavailable(),
      total = report.total,
      "harvest complete"
    );
    for (doc_type, count) in &report.by_type {
      tracing::info!(%doc_type, count, "records by type");
    }

    Ok(report)
  }

  /// The last snapshot, or an empty catalog if it cannot be read.
  async fn load_catalog(&self) -> Catalog {
    match self.store.load().await {
      Ok(records) => {
        tracing::info!(records = records.len(), "loaded existing catalog");
        Catalog::from_records(records)
      }
      Err(e) => {
        tracing::warn!(error = %e, "catalog snapshot unreadable; starting empty");
        Catalog::new()
      }
    }
  }

  async fn harvest_institute(
    &self,
    institute: &Institute,
    catalog: &mut Catalog,
  ) -> InstituteOutcome {
    tracing::info!(institute = %institute.name, "harvesting");

    let Some(adapter) = self.adapters.resolve(&institute.name) else {
      tracing::info!(institute = %institute.name, "no adapter registered; skipping");
      return InstituteOutcome::NoAdapter;
    };

    let extraction = match fetch_listing(adapter, &self.fetcher, institute).await {
      Ok(extraction) => extraction,
      Err(e) => {
        tracing::warn!(institute = %institute.name, error = %e, "listing unavailable");
        return InstituteOutcome::Unavailable { reason: e.to_string() };
      }
    };

    let mut tally = IngestTally {
      rows: extraction.rows(),
      skipped: extraction.skipped,
      failed: extraction.failures.len(),
      ..IngestTally::default()
    };

    for entry in extraction.entries {
      let candidate = normalize(entry, institute, adapter.vocabulary());
      let title = candidate.title.clone();

      match catalog.ingest(candidate) {
        Admission::Admitted { id } => {
          tally.admitted += 1;
          tracing::info!(institute = %institute.name, %id, %title, "admitted record");
        }
        Admission::Duplicate => {
          tally.duplicates += 1;
          tracing::debug!(institute = %institute.name, %title, "already catalogued");
        }
      }
    }

    tracing::info!(
      institute = %institute.name,
      rows = tally.rows,
      admitted = tally.admitted,
      duplicates = tally.duplicates,
      failed = tally.failed,
      "institute done"
    );
    InstituteOutcome::Harvested(tally)
  }
}
