//! Politeness delay between institutes.

use std::time::Duration;

use rand::Rng as _;

/// A pause drawn uniformly from `[min, max]` before each institute after the
/// first. It only spreads load on the remote sites; results do not depend on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolitenessDelay {
  min: Duration,
  max: Duration,
}

impl PolitenessDelay {
  /// Bounds are reordered if given backwards.
  pub fn new(min: Duration, max: Duration) -> Self {
    Self { min: min.min(max), max: max.max(min) }
  }

  /// No pause at all.
  pub fn none() -> Self { Self::new(Duration::ZERO, Duration::ZERO) }

  pub fn sample(&self) -> Duration {
    if self.min == self.max {
      return self.min;
    }
    rand::thread_rng().gen_range(self.min..=self.max)
  }

  pub async fn pause(&self) {
    let delay = self.sample();
    if !delay.is_zero() {
      tracing::debug!(delay_ms = delay.as_millis() as u64, "politeness delay");
      tokio::time::sleep(delay).await;
    }
  }
}

impl Default for PolitenessDelay {
  fn default() -> Self {
    Self::new(Duration::from_secs(1), Duration::from_secs(3))
  }
}
