//! [`AdapterRegistry`]: name-pattern dispatch from institutes to adapters.

use std::fmt;

use crate::{
  SourceAdapter,
  institutes::{Busan, Daegu, Incheon, Seoul},
};

/// Ordered set of adapters; the first whose pattern occurs in an institute
/// name wins.
pub struct AdapterRegistry {
  adapters: Vec<Box<dyn SourceAdapter>>,
}

impl AdapterRegistry {
  /// A registry with no adapters.
  pub fn empty() -> Self { Self { adapters: Vec::new() } }

  /// A registry with every built-in institute adapter.
  pub fn builtin() -> Self {
    let mut registry = Self::empty();
    registry
      .register(Seoul)
      .register(Busan)
      .register(Daegu)
      .register(Incheon);
    registry
  }

  pub fn register(&mut self, adapter: impl SourceAdapter + 'static) -> &mut Self {
    self.adapters.push(Box::new(adapter));
    self
  }

  /// The adapter serving `institute_name`, if any.
  pub fn resolve(&self, institute_name: &str) -> Option<&dyn SourceAdapter> {
    self
      .adapters
      .iter()
      .find(|adapter| institute_name.contains(adapter.name_pattern()))
      .map(|adapter| &**adapter)
  }

  pub fn len(&self) -> usize { self.adapters.len() }

  pub fn is_empty(&self) -> bool { self.adapters.is_empty() }
}

impl fmt::Debug for AdapterRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
      .entries(self.adapters.iter().map(|a| a.name_pattern()))
      .finish()
  }
}
