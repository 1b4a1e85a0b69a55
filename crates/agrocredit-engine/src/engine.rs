//! Calculation dispatcher

use crate::agroforestry::estimate_agroforestry;
use crate::policy::apply_policy;
use crate::rice::estimate_rice_methane;
use crate::{ConfigError, EngineConfig, SpeciesRegistry};
use agrocredit_domain::methodology::METHODOLOGY_VERSION;
use agrocredit_domain::{
    CalculationInputs, CalculationKind, CalculationResult, Measurement, Result, SpeciesProvider,
    SpeciesTable,
};
use std::sync::Arc;
use tracing::info;

/// Run one calculation against an explicit species table
///
/// Validates `kind`, picks the matching section of `inputs`, runs the
/// estimator and the conservativeness policy, and assembles the result.
///
/// # Errors
///
/// - `UnsupportedCalculationKind` if `kind` is not "agroforestry" or "rice"
/// - `MissingMeasurement` if `inputs` has no section for the kind
/// - `UnknownSpecies` / `InvalidMeasurement` from the estimators
pub fn calculate(
    kind: &str,
    inputs: &CalculationInputs,
    species_table: &SpeciesTable,
) -> Result<CalculationResult> {
    let kind: CalculationKind = kind.parse()?;
    let measurement = inputs.select(kind)?;
    calculate_measurement(inputs.plot_id.as_deref(), measurement, species_table)
}

/// Run one calculation for an already-typed measurement
pub fn calculate_measurement(
    plot_id: Option<&str>,
    measurement: Measurement,
    species_table: &SpeciesTable,
) -> Result<CalculationResult> {
    let kind = measurement.kind();

    let (quantity, co2_equivalent_kg, raw_credits_tco2e, species_name) = match &measurement {
        Measurement::Agroforestry(trees) => {
            let estimate = estimate_agroforestry(trees, species_table)?;
            let species_name = species_table
                .get(&trees.species_key)
                .map(|species| species.display_name.clone());
            (
                estimate.biomass_carbon_kg,
                estimate.co2_equivalent_kg,
                estimate.raw_credits_tco2e,
                species_name,
            )
        }
        Measurement::Rice(paddy) => {
            let estimate = estimate_rice_methane(paddy)?;
            (
                estimate.methane_reduction_kg,
                estimate.co2_equivalent_kg,
                estimate.raw_credits_tco2e,
                None,
            )
        }
    };

    let outcome = apply_policy(kind, raw_credits_tco2e);

    info!(
        kind = kind.as_str(),
        plot_id = plot_id.unwrap_or("-"),
        raw_credits_tco2e,
        conservative_credits_tco2e = outcome.conservative_credits_tco2e,
        "calculation complete"
    );

    let (biomass_carbon_kg, methane_reduction_kg) = match kind {
        CalculationKind::Agroforestry => (Some(quantity), None),
        CalculationKind::Rice => (None, Some(quantity)),
    };

    Ok(CalculationResult {
        kind,
        plot_id: plot_id.map(str::to_string),
        biomass_carbon_kg,
        methane_reduction_kg,
        species_name,
        co2_equivalent_kg,
        raw_credits_tco2e,
        uncertainty_tco2e: outcome.uncertainty_tco2e,
        conservative_credits_tco2e: outcome.conservative_credits_tco2e,
        methodology_version: METHODOLOGY_VERSION.to_string(),
        inputs_snapshot: measurement,
    })
}

/// Calculation engine bound to a species reference provider
///
/// Each call takes one table snapshot from the provider and uses it
/// throughout, so concurrent reloads never affect a running calculation.
///
/// # Examples
///
/// ```
/// use agrocredit_domain::{CalculationInputs, RiceFieldMeasurement, WaterRegime, OrganicAmendment};
/// use agrocredit_engine::Engine;
///
/// let engine = Engine::builtin();
/// let inputs = CalculationInputs::rice(RiceFieldMeasurement {
///     area_hectares: 2.5,
///     water_regime: WaterRegime::Intermittent,
///     organic_amendment: OrganicAmendment::Compost,
///     fertilizer_type: "urea".to_string(),
/// });
///
/// let result = engine.calculate("rice", &inputs).unwrap();
/// assert_eq!(result.raw_credits_tco2e, 1.875);
/// ```
#[derive(Debug, Default)]
pub struct Engine<P = SpeciesRegistry> {
    provider: P,
}

impl Engine<SpeciesRegistry> {
    /// Engine over the built-in species table
    pub fn builtin() -> Self {
        Self::new(SpeciesRegistry::builtin())
    }

    /// Engine over the species table described by `config`
    pub fn from_config(config: &EngineConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(SpeciesRegistry::from_config(config)?))
    }

    /// Registry backing this engine, for table reloads
    pub fn registry(&self) -> &SpeciesRegistry {
        &self.provider
    }
}

impl<P: SpeciesProvider> Engine<P> {
    /// Create an engine over any species provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Current species table snapshot
    pub fn species_table(&self) -> Arc<SpeciesTable> {
        self.provider.species_table()
    }

    /// Run a calculation selected by a kind string
    pub fn calculate(&self, kind: &str, inputs: &CalculationInputs) -> Result<CalculationResult> {
        let table = self.species_table();
        calculate(kind, inputs, &table)
    }

    /// Run a calculation for a typed measurement
    pub fn calculate_measurement(
        &self,
        plot_id: Option<&str>,
        measurement: Measurement,
    ) -> Result<CalculationResult> {
        let table = self.species_table();
        calculate_measurement(plot_id, measurement, &table)
    }
}
