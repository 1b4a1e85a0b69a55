//! Agrocredit Domain Layer
//!
//! This crate contains the value objects and reference data for the carbon
//! credit calculation engine. It holds no behavior beyond validation and
//! lookups: the estimators and the conservativeness policy live in
//! `agrocredit-engine`.
//!
//! ## Key Concepts
//!
//! - **Measurement**: Declared or field-measured agronomic inputs (trees or a rice paddy)
//! - **Species Reference**: Allometric coefficients `a`, `b` for `AGB = a * DBH^b`
//! - **Emission Factors**: Baseline and project methane rates per water regime
//! - **Calculation Result**: Raw, uncertainty and conservative credits plus an input snapshot
//!
//! ## Architecture
//!
//! - Value objects only, no shared mutable state
//! - Serde derives on everything that crosses the caller boundary
//! - Trait definitions for the reference data seam (`SpeciesProvider`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emission_factors;
pub mod error;
pub mod kind;
pub mod measurement;
pub mod methodology;
pub mod result;
pub mod species;
pub mod traits;

// Re-exports for convenience
pub use emission_factors::EmissionFactors;
pub use error::{CalculationError, Result};
pub use kind::CalculationKind;
pub use measurement::{
    CalculationInputs, Measurement, OrganicAmendment, RiceFieldMeasurement, TreeMeasurement,
    WaterRegime,
};
pub use result::{round_to, CalculationResult};
pub use species::{SpeciesReference, SpeciesTable};
pub use traits::SpeciesProvider;
