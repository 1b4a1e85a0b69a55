//! Rice methane estimator

use agrocredit_domain::methodology::{KG_PER_TONNE, METHANE_GWP_100};
use agrocredit_domain::{CalculationError, EmissionFactors, Result, RiceFieldMeasurement};
use tracing::debug;

/// Physical quantities produced by the rice estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiceEstimate {
    /// Emission factors used for the regime
    pub factors: EmissionFactors,
    /// Methane avoided over the whole area (kg CH4)
    pub methane_reduction_kg: f64,
    /// CO2-equivalent of that methane (kg CO2e)
    pub co2_equivalent_kg: f64,
    /// Credits before any discount (tCO2e)
    pub raw_credits_tco2e: f64,
}

/// Estimate methane reduction and raw credits for a rice paddy
///
/// `organic_amendment` and `fertilizer_type` are carried for provenance and
/// do not enter the calculation.
///
/// # Errors
///
/// `InvalidMeasurement` if the area is not a positive finite number, or is
/// large enough that the CO2e total overflows.
pub fn estimate_rice_methane(measurement: &RiceFieldMeasurement) -> Result<RiceEstimate> {
    measurement.validate()?;

    let factors = EmissionFactors::for_regime(measurement.water_regime);
    let methane_reduction_kg = factors.reduction_per_hectare() * measurement.area_hectares;
    let co2_equivalent_kg = methane_reduction_kg * METHANE_GWP_100;
    if !co2_equivalent_kg.is_finite() {
        return Err(CalculationError::invalid(
            "area_hectares",
            "area overflows the CO2e total",
        ));
    }
    let raw_credits_tco2e = co2_equivalent_kg / KG_PER_TONNE;

    debug!(
        regime = measurement.water_regime.as_str(),
        area_hectares = measurement.area_hectares,
        baseline = factors.baseline,
        project = factors.project,
        methane_reduction_kg,
        co2_equivalent_kg,
        raw_credits_tco2e,
        "rice methane estimate"
    );

    Ok(RiceEstimate {
        factors,
        methane_reduction_kg,
        co2_equivalent_kg,
        raw_credits_tco2e,
    })
}
