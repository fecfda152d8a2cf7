//! Table registry - mounted tables keyed by cache manager name.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::model::CacheRecord;

use super::CacheTable;

/// Registry of mounted cache tables.
///
/// The console shows one table per cache manager. Hosts mount a table when
/// the view opens and unmount it when the view closes; mounting the same
/// container again replaces the previous table, which is how a refreshed
/// cache list reaches the component.
#[derive(Clone)]
pub struct TableRegistry {
    tables: Arc<RwLock<HashMap<String, CacheTable>>>,
}

impl TableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        info!("table registry initialized");
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Mount a table for a container, replacing any previous mount.
    pub fn mount(&self, container: &str, caches: Vec<CacheRecord>) {
        let table = CacheTable::mount(container, caches);
        let mut tables = self.tables.write().unwrap();
        if tables.insert(container.to_string(), table).is_some() {
            debug!(container, "previous table replaced on remount");
        }
    }

    /// Unmount a container's table.
    ///
    /// Returns `true` if a table was mounted.
    pub fn unmount(&self, container: &str) -> bool {
        let removed = self.tables.write().unwrap().remove(container).is_some();
        if removed {
            debug!(container, "table unmounted");
        }
        removed
    }

    /// Check whether a table is mounted for the given container.
    #[allow(dead_code)]
    pub fn contains(&self, container: &str) -> bool {
        self.tables.read().unwrap().contains_key(container)
    }

    /// Run a closure against a mounted table.
    ///
    /// Returns `None` if no table is mounted for the container.
    pub fn with_table<R>(&self, container: &str, f: impl FnOnce(&CacheTable) -> R) -> Option<R> {
        let tables = self.tables.read().unwrap();
        tables.get(container).map(f)
    }

    /// Apply a mutation to a mounted table.
    ///
    /// The mutation runs to completion under the write guard, so the
    /// derived window is consistent before anything else observes it.
    pub fn with_table_mut<R>(
        &self,
        container: &str,
        f: impl FnOnce(&mut CacheTable) -> R,
    ) -> Option<R> {
        let mut tables = self.tables.write().unwrap();
        tables.get_mut(container).map(f)
    }

    /// Number of mounted tables.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tables.read().unwrap().len()
    }

    /// Check if no table is mounted.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tables.read().unwrap().is_empty()
    }

    /// Names of all mounted containers.
    #[allow(dead_code)]
    pub fn container_names(&self) -> Vec<String> {
        self.tables.read().unwrap().keys().cloned().collect()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read().unwrap();
        f.debug_struct("TableRegistry")
            .field("table_count", &tables.len())
            .field("containers", &tables.keys().collect::<Vec<_>>())
            .finish()
    }
}
