//! Agroforestry carbon estimator
//!
//! Converts a tree stand into biomass carbon and credits:
//!
//! 1. `agb_per_tree = a * DBH^b` (kg dry biomass)
//! 2. `total_agb = agb_per_tree * tree_count`
//! 3. `carbon = total_agb * 0.47`
//! 4. `co2e = carbon * 3.67`
//! 5. `credits = co2e / 1000`

use agrocredit_domain::methodology::{CARBON_FRACTION, CO2_PER_CARBON, KG_PER_TONNE};
use agrocredit_domain::{CalculationError, Result, SpeciesTable, TreeMeasurement};
use tracing::{debug, warn};

/// Physical quantities produced by the agroforestry estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgroforestryEstimate {
    /// Above-ground biomass of one average tree (kg)
    pub agb_per_tree_kg: f64,
    /// Above-ground biomass of the whole stand (kg)
    pub total_agb_kg: f64,
    /// Carbon held in the stand's biomass (kg C)
    pub biomass_carbon_kg: f64,
    /// CO2-equivalent of that carbon (kg CO2e)
    pub co2_equivalent_kg: f64,
    /// Credits before any discount (tCO2e)
    pub raw_credits_tco2e: f64,
}

/// Estimate biomass carbon and raw credits for a tree stand
///
/// # Errors
///
/// - `UnknownSpecies` if the species key is not in `species_table`
/// - `InvalidMeasurement` for non-positive or non-finite dimensions, or a
///   stand whose totals overflow
pub fn estimate_agroforestry(
    measurement: &TreeMeasurement,
    species_table: &SpeciesTable,
) -> Result<AgroforestryEstimate> {
    let species = species_table.lookup(&measurement.species_key).inspect_err(|_| {
        warn!(species = %measurement.species_key, "species not in reference table");
    })?;
    measurement.validate()?;

    let agb_per_tree_kg = species.biomass_per_tree(measurement.avg_diameter_cm);
    if !agb_per_tree_kg.is_finite() {
        return Err(CalculationError::invalid(
            "avg_diameter_cm",
            format!(
                "produces non-finite biomass for species '{}'",
                species.species_key
            ),
        ));
    }

    let total_agb_kg = agb_per_tree_kg * f64::from(measurement.tree_count);
    let biomass_carbon_kg = total_agb_kg * CARBON_FRACTION;
    let co2_equivalent_kg = biomass_carbon_kg * CO2_PER_CARBON;
    if !co2_equivalent_kg.is_finite() {
        return Err(CalculationError::invalid(
            "tree_count",
            format!(
                "stand of {} trees overflows the CO2e total",
                measurement.tree_count
            ),
        ));
    }
    let raw_credits_tco2e = co2_equivalent_kg / KG_PER_TONNE;

    debug!(
        species = %species.species_key,
        tree_count = measurement.tree_count,
        agb_per_tree_kg,
        total_agb_kg,
        biomass_carbon_kg,
        co2_equivalent_kg,
        raw_credits_tco2e,
        "agroforestry estimate"
    );

    Ok(AgroforestryEstimate {
        agb_per_tree_kg,
        total_agb_kg,
        biomass_carbon_kg,
        co2_equivalent_kg,
        raw_credits_tco2e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stand(species: &str, tree_count: u32, diameter: f64) -> TreeMeasurement {
        TreeMeasurement {
            species_key: species.to_string(),
            tree_count,
            avg_diameter_cm: diameter,
            avg_height_m: 12.0,
            stand_age_years: 5.0,
        }
    }

    #[test]
    fn test_mango_stand() {
        let table = SpeciesTable::builtin();
        let estimate = estimate_agroforestry(&stand("mango", 100, 25.0), &table).unwrap();

        // 0.0673 * 25^2.7 = 400.362
        assert!((estimate.agb_per_tree_kg - 400.3622).abs() < 0.001);
        assert!((estimate.total_agb_kg - 40036.22).abs() < 0.01);
        assert!((estimate.biomass_carbon_kg - 18817.02).abs() < 0.01);
        assert!((estimate.co2_equivalent_kg - 69058.48).abs() < 0.01);
        assert!((estimate.raw_credits_tco2e - 69.0585).abs() < 0.0001);
    }

    #[test]
    fn test_chain_uses_fixed_constants() {
        let table = SpeciesTable::builtin();
        let estimate = estimate_agroforestry(&stand("teak", 40, 18.0), &table).unwrap();

        assert_eq!(estimate.biomass_carbon_kg, estimate.total_agb_kg * 0.47);
        assert_eq!(estimate.co2_equivalent_kg, estimate.biomass_carbon_kg * 3.67);
        assert_eq!(estimate.raw_credits_tco2e, estimate.co2_equivalent_kg / 1000.0);
    }

    #[test]
    fn test_zero_trees_yield_zero() {
        let table = SpeciesTable::builtin();
        let estimate = estimate_agroforestry(&stand("neem", 0, 30.0), &table).unwrap();

        assert_eq!(estimate.total_agb_kg, 0.0);
        assert_eq!(estimate.biomass_carbon_kg, 0.0);
        assert_eq!(estimate.co2_equivalent_kg, 0.0);
        assert_eq!(estimate.raw_credits_tco2e, 0.0);
    }

    #[test]
    fn test_unknown_species() {
        let table = SpeciesTable::builtin();
        let err = estimate_agroforestry(&stand("baobab", 10, 20.0), &table).unwrap_err();
        assert_eq!(err, CalculationError::UnknownSpecies("baobab".to_string()));
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let table = SpeciesTable::builtin();
        let err = estimate_agroforestry(&stand("mango", 10, 0.0), &table).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidMeasurement { field: "avg_diameter_cm", .. }
        ));
    }

    #[test]
    fn test_negative_diameter_rejected_even_with_zero_trees() {
        let table = SpeciesTable::builtin();
        let err = estimate_agroforestry(&stand("mango", 0, -4.0), &table).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidMeasurement { .. }));
    }

    #[test]
    fn test_overflowing_diameter_rejected() {
        let table = SpeciesTable::builtin();
        let err = estimate_agroforestry(&stand("mango", 10, 1e200), &table).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidMeasurement { field: "avg_diameter_cm", .. }
        ));
    }

    #[test]
    fn test_overflowing_stand_total_rejected() {
        let table = SpeciesTable::builtin();
        // Per-tree biomass stays finite, the stand total does not
        let measurement = stand("teak", u32::MAX, 1e110);
        assert!(table.lookup("teak").unwrap().biomass_per_tree(1e110).is_finite());

        let err = estimate_agroforestry(&measurement, &table).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidMeasurement { field: "tree_count", .. }
        ));
    }
}
