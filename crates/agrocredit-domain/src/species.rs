//! Species reference table (allometric coefficients)

use crate::{CalculationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allometric coefficients for one tree species
///
/// Above-ground biomass per tree is `allometric_a * DBH^allometric_b`, with
/// DBH in centimetres and the result in kilograms of dry biomass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesReference {
    /// Unique lookup key (e.g., "mango")
    pub species_key: String,

    /// Human-readable name (e.g., "Mango")
    pub display_name: String,

    /// Scale coefficient `a`
    pub allometric_a: f64,

    /// Exponent `b`, typically in [2.0, 3.2]
    pub allometric_b: f64,
}

impl SpeciesReference {
    /// Create a new species reference
    pub fn new(
        species_key: impl Into<String>,
        display_name: impl Into<String>,
        allometric_a: f64,
        allometric_b: f64,
    ) -> Self {
        Self {
            species_key: species_key.into(),
            display_name: display_name.into(),
            allometric_a,
            allometric_b,
        }
    }

    /// Above-ground biomass of a single tree with the given diameter (kg)
    pub fn biomass_per_tree(&self, diameter_cm: f64) -> f64 {
        self.allometric_a * diameter_cm.powf(self.allometric_b)
    }
}

/// Immutable keyed mapping of species references
///
/// Keys are matched exactly. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesTable {
    entries: BTreeMap<String, SpeciesReference>,
}

impl SpeciesTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference table shipped with the engine
    ///
    /// | Key | Name | a | b |
    /// |-----|------|---|---|
    /// | coconut | Coconut | 0.0454 | 2.6 |
    /// | mango | Mango | 0.0673 | 2.7 |
    /// | neem | Neem | 0.0612 | 2.65 |
    /// | teak | Teak | 0.0751 | 2.8 |
    pub fn builtin() -> Self {
        [
            SpeciesReference::new("mango", "Mango", 0.0673, 2.7),
            SpeciesReference::new("coconut", "Coconut", 0.0454, 2.6),
            SpeciesReference::new("teak", "Teak", 0.0751, 2.8),
            SpeciesReference::new("neem", "Neem", 0.0612, 2.65),
        ]
        .into_iter()
        .collect()
    }

    /// Insert or replace an entry, returning the previous one
    pub fn insert(&mut self, species: SpeciesReference) -> Option<SpeciesReference> {
        self.entries.insert(species.species_key.clone(), species)
    }

    /// Get an entry by key
    pub fn get(&self, species_key: &str) -> Option<&SpeciesReference> {
        self.entries.get(species_key)
    }

    /// Get an entry by key, failing with `UnknownSpecies` if absent
    pub fn lookup(&self, species_key: &str) -> Result<&SpeciesReference> {
        self.get(species_key)
            .ok_or_else(|| CalculationError::UnknownSpecies(species_key.to_string()))
    }

    /// Check whether a key is present
    pub fn contains(&self, species_key: &str) -> bool {
        self.entries.contains_key(species_key)
    }

    /// Number of species in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesReference> {
        self.entries.values()
    }

    /// Overlay another table's entries on top of this one
    pub fn merged_with(mut self, overrides: SpeciesTable) -> Self {
        self.entries.extend(overrides.entries);
        self
    }
}

impl FromIterator<SpeciesReference> for SpeciesTable {
    fn from_iter<I: IntoIterator<Item = SpeciesReference>>(iter: I) -> Self {
        let mut table = SpeciesTable::new();
        for species in iter {
            table.insert(species);
        }
        table
    }
}
