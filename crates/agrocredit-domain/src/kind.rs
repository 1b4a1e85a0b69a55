//! Calculation kind selector

use crate::CalculationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which estimator a calculation runs
///
/// - Agroforestry: biomass carbon from allometric equations
/// - Rice: methane reduction from water management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    /// Agroforestry biomass accumulation
    Agroforestry,

    /// Rice-paddy methane-emission reduction
    Rice,
}

impl CalculationKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Agroforestry => "agroforestry",
            CalculationKind::Rice => "rice",
        }
    }

    /// Parse a kind from a string, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "agroforestry" => Some(CalculationKind::Agroforestry),
            "rice" => Some(CalculationKind::Rice),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalculationKind {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CalculationError::UnsupportedCalculationKind(s.to_string()))
    }
}
