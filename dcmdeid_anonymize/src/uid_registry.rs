//! Replacement of UIDs with generated ones, keeping every original UID mapped
//! to the same replacement so that references between records stay intact.

use std::collections::HashMap;
use std::sync::Mutex;

use dcmdeid_core::unique_identifier;

/// Generates new UIDs that are unique with high probability.
///
pub trait UidGenerator {
  fn generate(&mut self) -> String;
}

/// Generates random UIDs under the `2.25` root, i.e. `2.25.<random u128>`.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomUidGenerator;

impl UidGenerator for RandomUidGenerator {
  fn generate(&mut self) -> String {
    unique_identifier::new_random()
  }
}

/// An append-only mapping of original UIDs to their replacements.
///
pub struct UidRegistry {
  mappings: HashMap<String, String>,
  generator: Box<dyn UidGenerator + Send>,
}

impl core::fmt::Debug for UidRegistry {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    f.debug_struct("UidRegistry")
      .field("mappings", &self.mappings)
      .finish_non_exhaustive()
  }
}

impl Default for UidRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl UidRegistry {
  /// Returns a new empty registry that generates random UIDs.
  ///
  pub fn new() -> Self {
    Self::with_generator(RandomUidGenerator)
  }

  pub fn with_generator(generator: impl UidGenerator + Send + 'static) -> Self {
    Self {
      mappings: HashMap::new(),
      generator: Box::new(generator),
    }
  }

  /// Returns a registry seeded with existing mappings, e.g. ones taken from an
  /// earlier session, so that UIDs stay consistent across sessions.
  ///
  pub fn from_mappings(
    mappings: impl IntoIterator<Item = (String, String)>,
  ) -> Self {
    let mut registry = Self::new();
    registry.mappings.extend(mappings);
    registry
  }

  /// Returns the replacement for a UID, generating and storing a new one if
  /// it hasn't been seen before. An empty UID always gets a fresh replacement
  /// that isn't stored.
  ///
  pub fn pseudonymize(&mut self, original: &str) -> String {
    if original.is_empty() {
      return self.generator.generate();
    }

    if let Some(uid) = self.mappings.get(original) {
      return uid.clone();
    }

    let uid = self.generator.generate();
    self.mappings.insert(original.to_string(), uid.clone());

    uid
  }

  pub fn get(&self, original: &str) -> Option<&str> {
    self.mappings.get(original).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.mappings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.mappings.is_empty()
  }

  /// Returns all mappings sorted by original UID.
  ///
  pub fn mappings(&self) -> Vec<(&str, &str)> {
    let mut mappings: Vec<_> = self
      .mappings
      .iter()
      .map(|(original, uid)| (original.as_str(), uid.as_str()))
      .collect();

    mappings.sort_unstable();
    mappings
  }
}

/// A [`UidRegistry`] that can be shared between threads. Looking up and
/// inserting a mapping happens under a single lock.
///
#[derive(Debug, Default)]
pub struct SharedUidRegistry(Mutex<UidRegistry>);

impl SharedUidRegistry {
  pub fn new(registry: UidRegistry) -> Self {
    Self(Mutex::new(registry))
  }

  pub fn pseudonymize(&self, original: &str) -> String {
    let mut registry = match self.0.lock() {
      Ok(registry) => registry,
      Err(poisoned) => poisoned.into_inner(),
    };

    registry.pseudonymize(original)
  }

  pub fn into_inner(self) -> UidRegistry {
    match self.0.into_inner() {
      Ok(registry) => registry,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}
