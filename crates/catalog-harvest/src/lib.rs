//! Harvest orchestration for the education catalog.
//!
//! [`Harvester`] walks the institute registry in order, fetches each
//! institute's listing through its source adapter, normalises and admits the
//! entries into a single [`Catalog`](catalog_core::catalog::Catalog), and
//! saves the snapshot once at the end. One institute failing never stops the
//! others; only an unusable registry or a failed save ends a run early.

pub mod delay;
pub mod error;
pub mod harvester;
pub mod institutes;
pub mod report;
pub mod settings;

pub use delay::PolitenessDelay;
pub use error::{Error, Result};
pub use harvester::Harvester;
pub use institutes::load_institutes;
pub use report::{IngestTally, InstituteOutcome, InstituteReport, RunReport};
pub use settings::HarvestConfig;
