//! Measurement inputs for a calculation request

use crate::{CalculationError, CalculationKind, Result};
use serde::{Deserialize, Serialize};

/// Water management regime of a rice paddy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRegime {
    /// Continuous flooding (baseline practice)
    Continuous,
    /// Intermittent irrigation / alternate wetting and drying
    Intermittent,
    /// Any other regime
    Other,
}

impl WaterRegime {
    /// Get the regime name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRegime::Continuous => "continuous",
            WaterRegime::Intermittent => "intermittent",
            WaterRegime::Other => "other",
        }
    }
}

/// Organic amendment applied to a rice paddy
///
/// Recorded for provenance only; it does not change the numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganicAmendment {
    /// No organic amendment
    #[default]
    None,
    /// Compost
    Compost,
    /// Rice straw incorporation
    Straw,
}

impl OrganicAmendment {
    /// Get the amendment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganicAmendment::None => "none",
            OrganicAmendment::Compost => "compost",
            OrganicAmendment::Straw => "straw",
        }
    }
}

/// Declared or field-measured tree stand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeMeasurement {
    /// Key into the species reference table
    pub species_key: String,

    /// Number of trees; zero yields zero credits
    pub tree_count: u32,

    /// Average diameter at breast height (cm)
    pub avg_diameter_cm: f64,

    /// Average height (m); part of the input contract, unused by the formula
    pub avg_height_m: f64,

    /// Stand age (years)
    pub stand_age_years: f64,
}

impl TreeMeasurement {
    /// Check that every dimension is finite and positive
    pub fn validate(&self) -> Result<()> {
        require_positive("avg_diameter_cm", self.avg_diameter_cm)?;
        require_positive("avg_height_m", self.avg_height_m)?;
        require_positive("stand_age_years", self.stand_age_years)?;
        if self.species_key.trim().is_empty() {
            return Err(CalculationError::invalid("species_key", "must not be empty"));
        }
        Ok(())
    }
}

/// Declared rice paddy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiceFieldMeasurement {
    /// Paddy area (ha)
    pub area_hectares: f64,

    /// Water management regime
    pub water_regime: WaterRegime,

    /// Organic amendment (provenance only)
    #[serde(default)]
    pub organic_amendment: OrganicAmendment,

    /// Fertilizer type (provenance only, e.g., "urea")
    #[serde(default)]
    pub fertilizer_type: String,
}

impl RiceFieldMeasurement {
    /// Check that the area is finite and positive
    pub fn validate(&self) -> Result<()> {
        require_positive("area_hectares", self.area_hectares)
    }
}

/// One calculation's input record, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Measurement {
    /// Tree stand input
    Agroforestry(TreeMeasurement),
    /// Rice paddy input
    Rice(RiceFieldMeasurement),
}

impl Measurement {
    /// Kind implied by the input record
    pub fn kind(&self) -> CalculationKind {
        match self {
            Measurement::Agroforestry(_) => CalculationKind::Agroforestry,
            Measurement::Rice(_) => CalculationKind::Rice,
        }
    }
}

/// Calculator form state: one optional section per kind
///
/// The selected kind picks a section; the other is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Plot identifier carried into the result for the audit trail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_id: Option<String>,

    /// Tree stand section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agroforestry: Option<TreeMeasurement>,

    /// Rice paddy section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rice: Option<RiceFieldMeasurement>,
}

impl CalculationInputs {
    /// Inputs holding a single tree stand
    pub fn agroforestry(measurement: TreeMeasurement) -> Self {
        Self {
            agroforestry: Some(measurement),
            ..Self::default()
        }
    }

    /// Inputs holding a single rice paddy
    pub fn rice(measurement: RiceFieldMeasurement) -> Self {
        Self {
            rice: Some(measurement),
            ..Self::default()
        }
    }

    /// Attach a plot identifier
    pub fn with_plot_id(mut self, plot_id: impl Into<String>) -> Self {
        self.plot_id = Some(plot_id.into());
        self
    }

    /// Pick the section matching `kind`
    pub fn select(&self, kind: CalculationKind) -> Result<Measurement> {
        let measurement = match kind {
            CalculationKind::Agroforestry => {
                self.agroforestry.clone().map(Measurement::Agroforestry)
            }
            CalculationKind::Rice => self.rice.clone().map(Measurement::Rice),
        };
        measurement.ok_or(CalculationError::MissingMeasurement { kind })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalculationError::invalid(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(CalculationError::invalid(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}
