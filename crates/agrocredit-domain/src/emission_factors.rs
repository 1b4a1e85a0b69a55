//! Rice methane emission factors per water regime

use crate::WaterRegime;
use serde::{Deserialize, Serialize};

/// Baseline emission rate under continuous flooding
/// unit: kg CH4/ha/season
pub const CONTINUOUS_BASELINE_EMISSION: f64 = 150.0;

/// Baseline emission rate for every other regime
/// unit: kg CH4/ha/season
pub const DEFAULT_BASELINE_EMISSION: f64 = 75.0;

/// Project emission rate under intermittent irrigation
/// unit: kg CH4/ha/season
pub const INTERMITTENT_PROJECT_EMISSION: f64 = 45.0;

/// Project-to-baseline ratio for every non-intermittent regime (30% abatement)
pub const DEFAULT_PROJECT_RATIO: f64 = 0.7;

/// Baseline and project methane emission rates for one regime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// Emission rate without the intervention (kg CH4/ha/season)
    pub baseline: f64,

    /// Emission rate with the intervention (kg CH4/ha/season)
    pub project: f64,
}

impl EmissionFactors {
    /// Look up the factors for a water regime
    ///
    /// The baseline only distinguishes continuous flooding, while the
    /// project rate only distinguishes intermittent irrigation. For
    /// `Other` this means a 75 baseline with the 0.7 default abatement.
    /// The asymmetry is kept as-is pending methodology review.
    pub fn for_regime(regime: WaterRegime) -> Self {
        let baseline = match regime {
            WaterRegime::Continuous => CONTINUOUS_BASELINE_EMISSION,
            WaterRegime::Intermittent | WaterRegime::Other => DEFAULT_BASELINE_EMISSION,
        };

        let project = match regime {
            WaterRegime::Intermittent => INTERMITTENT_PROJECT_EMISSION,
            WaterRegime::Continuous | WaterRegime::Other => baseline * DEFAULT_PROJECT_RATIO,
        };

        Self { baseline, project }
    }

    /// Emission avoided per hectare per season
    pub fn reduction_per_hectare(&self) -> f64 {
        self.baseline - self.project
    }
}
