//! Trait definitions for external interactions
//!
//! These traits define the boundary between the calculation engine and the
//! reference data it consumes.

use crate::SpeciesTable;
use std::sync::Arc;

/// Source of the species reference table
///
/// Implemented by the engine's swappable registry and by a plain shared
/// table. Each call returns a complete snapshot: a calculation takes one
/// snapshot and uses it throughout.
pub trait SpeciesProvider {
    /// Current species table snapshot
    fn species_table(&self) -> Arc<SpeciesTable>;
}

impl SpeciesProvider for Arc<SpeciesTable> {
    fn species_table(&self) -> Arc<SpeciesTable> {
        Arc::clone(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_table_provider() {
        let provider = Arc::new(SpeciesTable::builtin());
        let snapshot = provider.species_table();
        assert!(Arc::ptr_eq(&provider, &snapshot));
        assert!(snapshot.contains("neem"));
    }
}
