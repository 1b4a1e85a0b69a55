//! Uncertainty and conservativeness policy
//!
//! A fixed-percentage proxy for statistical uncertainty propagation. Biomass
//! from allometric equations is discounted less than methane-flux estimates.
//!
//! | Kind | Uncertainty | Conservative credits |
//! |------|-------------|----------------------|
//! | agroforestry | 15% of raw | 85% of raw |
//! | rice | 25% of raw | 75% of raw |

use agrocredit_domain::methodology::{
    AGROFORESTRY_CONSERVATIVE_FRACTION, AGROFORESTRY_UNCERTAINTY_FRACTION,
    RICE_CONSERVATIVE_FRACTION, RICE_UNCERTAINTY_FRACTION,
};
use agrocredit_domain::CalculationKind;

/// Label reported alongside policy outputs
pub const POLICY_METHOD: &str = "fixed-percentage";

/// Per-kind discount fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservativenessPolicy {
    /// Fraction of raw credits reported as ± uncertainty
    pub uncertainty_fraction: f64,
    /// Fraction of raw credits retained after the buffer
    pub conservative_fraction: f64,
}

/// Uncertainty band and buffered credits for one raw figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyOutcome {
    /// ± uncertainty (tCO2e)
    pub uncertainty_tco2e: f64,
    /// Credits after the buffer (tCO2e)
    pub conservative_credits_tco2e: f64,
}

impl ConservativenessPolicy {
    /// Agroforestry discounts
    pub const AGROFORESTRY: Self = Self {
        uncertainty_fraction: AGROFORESTRY_UNCERTAINTY_FRACTION,
        conservative_fraction: AGROFORESTRY_CONSERVATIVE_FRACTION,
    };

    /// Rice discounts
    pub const RICE: Self = Self {
        uncertainty_fraction: RICE_UNCERTAINTY_FRACTION,
        conservative_fraction: RICE_CONSERVATIVE_FRACTION,
    };

    /// Policy for a calculation kind
    pub fn for_kind(kind: CalculationKind) -> Self {
        match kind {
            CalculationKind::Agroforestry => Self::AGROFORESTRY,
            CalculationKind::Rice => Self::RICE,
        }
    }

    /// Apply the discounts to a raw credit figure
    pub fn apply(&self, raw_credits_tco2e: f64) -> PolicyOutcome {
        PolicyOutcome {
            uncertainty_tco2e: raw_credits_tco2e * self.uncertainty_fraction,
            conservative_credits_tco2e: raw_credits_tco2e * self.conservative_fraction,
        }
    }

    /// Name of the uncertainty method
    pub fn method(&self) -> &'static str {
        POLICY_METHOD
    }

    /// Always true: fixed fractions stand in for real error propagation
    pub fn is_approximation(&self) -> bool {
        true
    }
}

/// Apply the kind's policy to a raw credit figure
pub fn apply_policy(kind: CalculationKind, raw_credits_tco2e: f64) -> PolicyOutcome {
    ConservativenessPolicy::for_kind(kind).apply(raw_credits_tco2e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agroforestry_policy() {
        let outcome = apply_policy(CalculationKind::Agroforestry, 100.0);
        assert!((outcome.uncertainty_tco2e - 15.0).abs() < 1e-9);
        assert!((outcome.conservative_credits_tco2e - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_rice_policy() {
        let outcome = apply_policy(CalculationKind::Rice, 1.875);
        assert_eq!(outcome.uncertainty_tco2e, 0.46875);
        assert_eq!(outcome.conservative_credits_tco2e, 1.40625);
    }

    #[test]
    fn test_zero_raw_credits() {
        for kind in [CalculationKind::Agroforestry, CalculationKind::Rice] {
            let outcome = apply_policy(kind, 0.0);
            assert_eq!(outcome.uncertainty_tco2e, 0.0);
            assert_eq!(outcome.conservative_credits_tco2e, 0.0);
        }
    }

    #[test]
    fn test_policy_is_flagged_as_approximation() {
        let policy = ConservativenessPolicy::for_kind(CalculationKind::Rice);
        assert!(policy.is_approximation());
        assert_eq!(policy.method(), "fixed-percentage");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_kind() -> impl Strategy<Value = CalculationKind> {
        prop_oneof![
            Just(CalculationKind::Agroforestry),
            Just(CalculationKind::Rice),
        ]
    }

    proptest! {
        /// Property: Conservative credits never exceed raw credits
        #[test]
        fn test_conservative_bounded_by_raw(kind in any_kind(), raw in 0.0f64..1.0e7) {
            let outcome = apply_policy(kind, raw);
            prop_assert!(outcome.conservative_credits_tco2e <= raw);
            prop_assert!(outcome.conservative_credits_tco2e >= 0.0);
        }

        /// Property: Uncertainty is never negative
        #[test]
        fn test_uncertainty_non_negative(kind in any_kind(), raw in 0.0f64..1.0e7) {
            let outcome = apply_policy(kind, raw);
            prop_assert!(outcome.uncertainty_tco2e >= 0.0);
        }

        /// Property: Rice is always discounted at least as much as agroforestry
        #[test]
        fn test_rice_discount_is_larger(raw in 0.0f64..1.0e7) {
            let agro = apply_policy(CalculationKind::Agroforestry, raw);
            let rice = apply_policy(CalculationKind::Rice, raw);
            prop_assert!(rice.conservative_credits_tco2e <= agro.conservative_credits_tco2e);
            prop_assert!(rice.uncertainty_tco2e >= agro.uncertainty_tco2e);
        }
    }
}
