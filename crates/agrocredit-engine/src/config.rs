//! Engine configuration and species table loading
//!
//! The species table file is TOML with one `[[species]]` entry per row:
//!
//! ```toml
//! [[species]]
//! species_key = "mango"
//! display_name = "Mango"
//! allometric_a = 0.0673
//! allometric_b = 2.7
//! ```

use crate::ConfigError;
use agrocredit_domain::methodology::PLAUSIBLE_ALLOMETRIC_B;
use agrocredit_domain::{SpeciesReference, SpeciesTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration for the calculation engine
///
/// # Examples
///
/// ```
/// use agrocredit_engine::EngineConfig;
///
/// // Built-in species table only
/// let config = EngineConfig::default();
/// assert!(config.species_table.is_none());
/// let table = config.load_species_table().unwrap();
/// assert!(table.contains("mango"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Species table file; `None` uses the built-in table
    pub species_table: Option<PathBuf>,

    /// Merge file entries over the built-in table instead of replacing it
    /// Default: false
    pub extend_builtin: bool,

    /// Log a warning for exponents outside the plausible [2.0, 3.2] range
    /// Default: true
    pub warn_on_implausible_exponent: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            species_table: None,
            extend_builtin: false,
            warn_on_implausible_exponent: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpeciesFile {
    #[serde(default)]
    species: Vec<SpeciesReference>,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extend_builtin && self.species_table.is_none() {
            return Err(ConfigError::Invalid(
                "extend_builtin requires species_table to be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the species table this configuration describes
    pub fn load_species_table(&self) -> Result<SpeciesTable, ConfigError> {
        self.validate()?;

        let Some(path) = &self.species_table else {
            return Ok(SpeciesTable::builtin());
        };

        let contents = std::fs::read_to_string(path)?;
        let table = self.parse_species_table(&contents)?;
        debug!(path = %path.display(), entries = table.len(), "loaded species table");

        if self.extend_builtin {
            Ok(SpeciesTable::builtin().merged_with(table))
        } else {
            Ok(table)
        }
    }

    /// Parse and validate species table TOML
    pub fn parse_species_table(&self, contents: &str) -> Result<SpeciesTable, ConfigError> {
        let file: SpeciesFile = toml::from_str(contents)?;
        self.validate_entries(&file.species)?;
        Ok(file.species.into_iter().collect())
    }

    fn validate_entries(&self, entries: &[SpeciesReference]) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for species in entries {
            validate_species(species)?;
            if !seen.insert(species.species_key.as_str()) {
                return Err(ConfigError::DuplicateSpecies(species.species_key.clone()));
            }
            if self.warn_on_implausible_exponent && !is_plausible_exponent(species.allometric_b) {
                warn!(
                    species = %species.species_key,
                    allometric_b = species.allometric_b,
                    "allometric exponent outside the plausible range"
                );
            }
        }

        Ok(())
    }
}

fn validate_species(species: &SpeciesReference) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidSpecies {
        key: species.species_key.clone(),
        reason,
    };

    if species.species_key.trim().is_empty() {
        return Err(invalid("species_key must not be empty".to_string()));
    }
    for (name, value) in [
        ("allometric_a", species.allometric_a),
        ("allometric_b", species.allometric_b),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(format!("{} must be positive, got {}", name, value)));
        }
    }
    Ok(())
}

fn is_plausible_exponent(b: f64) -> bool {
    let (low, high) = PLAUSIBLE_ALLOMETRIC_B;
    (low..=high).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
        [[species]]
        species_key = "jackfruit"
        display_name = "Jackfruit"
        allometric_a = 0.058
        allometric_b = 2.62

        [[species]]
        species_key = "mango"
        display_name = "Mango (Kolar)"
        allometric_a = 0.07
        allometric_b = 2.7
    "#;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.species_table.is_none());
        assert!(!config.extend_builtin);
        assert!(config.warn_on_implausible_exponent);
        assert_eq!(config.load_species_table().unwrap(), SpeciesTable::builtin());
    }

    #[test]
    fn test_parse_species_table() {
        let table = EngineConfig::default().parse_species_table(TABLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("jackfruit").unwrap().allometric_b, 2.62);
        assert_eq!(table.get("mango").unwrap().display_name, "Mango (Kolar)");
    }

    #[test]
    fn test_duplicate_species_rejected() {
        let contents = format!(
            "{}\n[[species]]\nspecies_key = \"mango\"\ndisplay_name = \"Again\"\nallometric_a = 0.1\nallometric_b = 2.5\n",
            TABLE
        );
        let err = EngineConfig::default().parse_species_table(&contents).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSpecies(key) if key == "mango"));
    }

    #[test]
    fn test_non_positive_coefficient_rejected() {
        let contents = r#"
            [[species]]
            species_key = "broken"
            display_name = "Broken"
            allometric_a = 0.0
            allometric_b = 2.5
        "#;
        let err = EngineConfig::default().parse_species_table(contents).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpecies { key, .. } if key == "broken"));
    }

    #[test]
    fn test_implausible_exponent_is_accepted() {
        let contents = r#"
            [[species]]
            species_key = "odd"
            display_name = "Odd"
            allometric_a = 0.05
            allometric_b = 3.9
        "#;
        let table = EngineConfig::default().parse_species_table(contents).unwrap();
        assert!(table.contains("odd"));
    }

    #[test]
    fn test_extend_builtin_requires_file() {
        let config = EngineConfig {
            extend_builtin: true,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_from_toml() {
        let config: EngineConfig = toml::from_str(
            r#"
            species_table = "/etc/agrocredit/species.toml"
            extend_builtin = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.species_table,
            Some(PathBuf::from("/etc/agrocredit/species.toml"))
        );
        assert!(config.extend_builtin);
        assert!(config.warn_on_implausible_exponent);
    }

    #[test]
    fn test_plausible_exponent_range() {
        assert!(is_plausible_exponent(2.0));
        assert!(is_plausible_exponent(2.7));
        assert!(is_plausible_exponent(3.2));
        assert!(!is_plausible_exponent(1.5));
    }
}
