//! Swappable species reference registry

use crate::{ConfigError, EngineConfig};
use agrocredit_domain::{SpeciesProvider, SpeciesTable};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Holds the active species table behind an atomic swap
///
/// Readers clone the current `Arc` and keep using it even if a reload
/// happens meanwhile, so a calculation never sees a half-updated table.
#[derive(Debug)]
pub struct SpeciesRegistry {
    table: RwLock<Arc<SpeciesTable>>,
}

impl SpeciesRegistry {
    /// Create a registry holding `table`
    pub fn new(table: SpeciesTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Registry holding the built-in table
    pub fn builtin() -> Self {
        Self::new(SpeciesTable::builtin())
    }

    /// Registry holding the table described by `config`
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.load_species_table()?))
    }

    /// Current table snapshot
    pub fn snapshot(&self) -> Arc<SpeciesTable> {
        // The stored Arc is always a complete table, so a poisoned lock is still usable
        let guard = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a new table, returning the previous one
    pub fn replace(&self, table: SpeciesTable) -> Arc<SpeciesTable> {
        let next = Arc::new(table);
        let entries = next.len();
        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        drop(guard);

        info!(entries, previous_entries = previous.len(), "species table replaced");
        previous
    }

    /// Reload from `config`; on error the current table stays in place
    pub fn reload(&self, config: &EngineConfig) -> Result<Arc<SpeciesTable>, ConfigError> {
        let table = config.load_species_table()?;
        Ok(self.replace(table))
    }
}

impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpeciesProvider for SpeciesRegistry {
    fn species_table(&self) -> Arc<SpeciesTable> {
        self.snapshot()
    }
}
