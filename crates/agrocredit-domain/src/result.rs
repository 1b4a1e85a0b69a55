//! Calculation result record

use crate::{CalculationKind, Measurement};
use serde::{Deserialize, Serialize};

/// Immutable outcome of one calculation
///
/// Exactly one of `biomass_carbon_kg` (agroforestry) and
/// `methane_reduction_kg` (rice) is set. `inputs_snapshot` is a copy of the
/// measurement that produced the figures, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Which estimator produced the result
    pub kind: CalculationKind,

    /// Plot identifier supplied with the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<String>,

    /// Carbon held in above-ground biomass (kg C), agroforestry only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biomass_carbon_kg: Option<f64>,

    /// Methane emission avoided (kg CH4), rice only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methane_reduction_kg: Option<f64>,

    /// Display name of the species used, agroforestry only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_name: Option<String>,

    /// CO2-equivalent of the carbon or methane figure (kg CO2e)
    pub co2_equivalent_kg: f64,

    /// Credits before any discount (tCO2e)
    pub raw_credits_tco2e: f64,

    /// Fixed-percentage uncertainty band, ± (tCO2e)
    pub uncertainty_tco2e: f64,

    /// Credits after the conservativeness buffer (tCO2e)
    pub conservative_credits_tco2e: f64,

    /// Methodology label the figures were computed under
    pub methodology_version: String,

    /// Copy of the measurement used
    pub inputs_snapshot: Measurement,
}

impl CalculationResult {
    /// Kind-specific physical quantity: biomass carbon or methane reduction (kg)
    pub fn primary_quantity_kg(&self) -> f64 {
        match self.kind {
            CalculationKind::Agroforestry => self.biomass_carbon_kg.unwrap_or(0.0),
            CalculationKind::Rice => self.methane_reduction_kg.unwrap_or(0.0),
        }
    }

    /// Copy with every numeric output rounded to `decimals` places
    ///
    /// Rounds half away from zero. The input snapshot is left untouched.
    pub fn rounded(&self, decimals: u32) -> Self {
        let round = |value: f64| round_to(value, decimals);
        Self {
            biomass_carbon_kg: self.biomass_carbon_kg.map(round),
            methane_reduction_kg: self.methane_reduction_kg.map(round),
            co2_equivalent_kg: round(self.co2_equivalent_kg),
            raw_credits_tco2e: round(self.raw_credits_tco2e),
            uncertainty_tco2e: round(self.uncertainty_tco2e),
            conservative_credits_tco2e: round(self.conservative_credits_tco2e),
            ..self.clone()
        }
    }
}

/// Round `value` to `decimals` places, half away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    // Past f64 precision rounding is a no-op
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
