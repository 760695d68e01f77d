//! Name-keyed service store.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::HarborError;
use crate::services::Closeable;

/// A stored registration: the opaque service value plus its optional
/// closeable role.
pub(crate) struct Entry {
    pub(crate) service: Arc<dyn Any + Send + Sync>,
    pub(crate) closer: Option<Arc<dyn Closeable>>,
}

/// Mapping from unique service name to [`Entry`].
///
/// Entries are never removed; a service is registered once and lives for the
/// rest of the process.
pub(crate) struct Store {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Store {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts `entry` under `name`, rejecting duplicates without mutating
    /// state.
    pub(crate) fn insert(&self, name: &str, entry: Entry) -> Result<(), HarborError> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(name) {
            return Err(HarborError::DuplicateName {
                name: name.to_string(),
            });
        }
        entries.insert(name.to_string(), entry);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(|entry| Arc::clone(&entry.service))
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Sorted list of registered names.
    pub(crate) fn names(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Snapshot of every entry that fulfills the closeable role.
    ///
    /// Order follows map iteration and is deliberately unspecified.
    pub(crate) fn closers(&self) -> Vec<(String, Arc<dyn Closeable>)> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(|(name, entry)| {
                entry
                    .closer
                    .as_ref()
                    .map(|closer| (name.clone(), Arc::clone(closer)))
            })
            .collect()
    }
}
