//! Methodology constants
//!
//! Point-in-time scientific constants shared by the estimators and the
//! conservativeness policy. They are fixed literals so that results stay
//! reproducible; a change to any of them is a new [`METHODOLOGY_VERSION`].

/// Label stamped on every calculation result
pub const METHODOLOGY_VERSION: &str = "agrocredit-simplified-v1";

/// Carbon fraction of dry biomass
/// unit: dimensionless
pub const CARBON_FRACTION: f64 = 0.47;

/// Molecular-weight ratio CO2/C (44/12), rounded to the canonical 3.67
/// unit: kg CO2 per kg C
pub const CO2_PER_CARBON: f64 = 3.67;

/// Global Warming Potential of methane over a 100-year horizon
/// unit: kg CO2e per kg CH4
pub const METHANE_GWP_100: f64 = 25.0;

/// One credit is one tonne of CO2-equivalent
/// unit: kg per tonne
pub const KG_PER_TONNE: f64 = 1000.0;

/// Uncertainty fraction for allometric biomass estimates
pub const AGROFORESTRY_UNCERTAINTY_FRACTION: f64 = 0.15;

/// Fraction of raw agroforestry credits retained after the buffer
pub const AGROFORESTRY_CONSERVATIVE_FRACTION: f64 = 0.85;

/// Uncertainty fraction for methane-flux estimates
pub const RICE_UNCERTAINTY_FRACTION: f64 = 0.25;

/// Fraction of raw rice credits retained after the buffer
pub const RICE_CONSERVATIVE_FRACTION: f64 = 0.75;

/// Biologically plausible range for the allometric exponent `b`
///
/// Advisory only, never enforced.
pub const PLAUSIBLE_ALLOMETRIC_B: (f64, f64) = (2.0, 3.2);
