//! Runtime configuration.
//!
//! Layered with the `config` crate: an optional TOML file, then environment
//! variables prefixed `CATALOG_` (e.g. `CATALOG_STORE_PATH`). Every field has
//! a default, so a run needs neither.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use serde::Deserialize;

use crate::{Error, PolitenessDelay, Result};

/// Harvest settings, deserialised from `catalog.toml` and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
  /// JSON array of institutes to harvest, in order.
  pub registry_path:        PathBuf,
  /// JSON snapshot of the catalog; created on first save.
  pub store_path:           PathBuf,
  pub request_timeout_secs: u64,
  pub delay_min_ms:         u64,
  pub delay_max_ms:         u64,
  pub user_agent:           String,
}

impl Default for HarvestConfig {
  fn default() -> Self {
    Self {
      registry_path:        PathBuf::from("data/institutes.json"),
      store_path:           PathBuf::from("data/all_materials.json"),
      request_timeout_secs: 15,
      delay_min_ms:         1_000,
      delay_max_ms:         3_000,
      user_agent:           concat!("catalog-harvest/", env!("CARGO_PKG_VERSION")).to_owned(),
    }
  }
}

impl HarvestConfig {
  /// Read `path` (if it exists) and the environment, then validate.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CATALOG").try_parsing(true))
      .build()?;

    let cfg: Self = settings.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
  }

  pub fn validate(&self) -> Result<()> {
    if self.request_timeout_secs == 0 {
      return Err(Error::InvalidConfig(
        "request_timeout_secs must be positive".into(),
      ));
    }
    if self.delay_min_ms > self.delay_max_ms {
      return Err(Error::InvalidConfig(format!(
        "delay_min_ms ({}) exceeds delay_max_ms ({})",
        self.delay_min_ms, self.delay_max_ms
      )));
    }
    Ok(())
  }

  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs)
  }

  pub fn delay(&self) -> PolitenessDelay {
    PolitenessDelay::new(
      Duration::from_millis(self.delay_min_ms),
      Duration::from_millis(self.delay_max_ms),
    )
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let cfg = HarvestConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.registry_path, PathBuf::from("data/institutes.json"));
    assert_eq!(cfg.request_timeout(), Duration::from_secs(15));
  }

  #[test]
  fn file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(
      &path,
      "store_path = \"out/materials.json\"\ndelay_min_ms = 0\ndelay_max_ms = 10\n",
    )
    .unwrap();

    let cfg = HarvestConfig::load(&path).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("out/materials.json"));
    assert_eq!(cfg.delay_max_ms, 10);
    assert_eq!(cfg.user_agent, HarvestConfig::default().user_agent);
  }

  #[test]
  fn inverted_delay_is_rejected() {
    let cfg = HarvestConfig {
      delay_min_ms: 5,
      delay_max_ms: 1,
      ..HarvestConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
  }

  #[test]
  fn zero_timeout_is_rejected() {
    let cfg = HarvestConfig {
      request_timeout_secs: 0,
      ..HarvestConfig::default()
    };
    assert!(cfg.validate().is_err());
  }
}
