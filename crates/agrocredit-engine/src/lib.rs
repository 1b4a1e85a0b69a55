//! Agrocredit Engine
//!
//! Turns agronomic measurements into carbon credit figures.
//!
//! The engine provides:
//! - Agroforestry biomass carbon estimation (allometric equations)
//! - Rice methane reduction estimation (water-regime emission factors)
//! - A fixed-percentage uncertainty and conservativeness policy
//! - A dispatcher that selects the estimator and assembles the result
//! - Species table loading from TOML with atomic reload
//!
//! Every calculation is a pure function of its inputs and one species table
//! snapshot. There is no I/O on the calculation path.
//!
//! # Examples
//!
//! ```
//! use agrocredit_domain::{CalculationInputs, TreeMeasurement};
//! use agrocredit_engine::Engine;
//!
//! let engine = Engine::builtin();
//! let inputs = CalculationInputs::agroforestry(TreeMeasurement {
//!     species_key: "mango".to_string(),
//!     tree_count: 100,
//!     avg_diameter_cm: 25.0,
//!     avg_height_m: 12.0,
//!     stand_age_years: 5.0,
//! })
//! .with_plot_id("AG-001");
//!
//! let result = engine.calculate("agroforestry", &inputs).unwrap();
//! assert!(result.conservative_credits_tco2e < result.raw_credits_tco2e);
//! ```
//!
//! # Configuration
//!
//! The engine can be configured via TOML:
//!
//! ```toml
//! species_table = "/etc/agrocredit/species.toml"
//! extend_builtin = true
//! warn_on_implausible_exponent = true
//! ```

#![warn(missing_docs)]

pub mod agroforestry;
mod config;
mod engine;
mod error;
pub mod policy;
mod registry;
pub mod rice;

pub use agroforestry::{estimate_agroforestry, AgroforestryEstimate};
pub use config::EngineConfig;
pub use engine::{calculate, calculate_measurement, Engine};
pub use error::ConfigError;
pub use policy::{apply_policy, ConservativenessPolicy, PolicyOutcome};
pub use registry::SpeciesRegistry;
pub use rice::{estimate_rice_methane, RiceEstimate};
