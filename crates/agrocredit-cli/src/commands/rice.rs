//! Rice command implementation.

use crate::cli::RiceArgs;
use crate::error::Result;
use crate::output::Formatter;
use agrocredit_domain::{CalculationInputs, RiceFieldMeasurement, SpeciesProvider};
use agrocredit_engine::Engine;

/// Execute the rice command.
pub fn execute_rice<P: SpeciesProvider>(
    args: RiceArgs,
    engine: &Engine<P>,
    formatter: &Formatter,
) -> Result<()> {
    let inputs = inputs_from_args(args);
    let result = engine.calculate("rice", &inputs)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Build calculation inputs from command arguments.
fn inputs_from_args(args: RiceArgs) -> CalculationInputs {
    let inputs = CalculationInputs::rice(RiceFieldMeasurement {
        area_hectares: args.area,
        water_regime: args.water.into(),
        organic_amendment: args.organic.into(),
        fertilizer_type: args.fertilizer,
    });

    match args.plot {
        Some(plot) => inputs.with_plot_id(plot),
        None => inputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OrganicArg, WaterRegimeArg};
    use agrocredit_domain::{OrganicAmendment, WaterRegime};

    #[test]
    fn test_inputs_from_args() {
        let inputs = inputs_from_args(RiceArgs {
            area: 2.5,
            water: WaterRegimeArg::Continuous,
            organic: OrganicArg::Straw,
            fertilizer: "ammonium sulfate".to_string(),
            plot: None,
        });
        assert!(inputs.plot_id.is_none());

        let paddy = inputs.rice.unwrap();
        assert_eq!(paddy.water_regime, WaterRegime::Continuous);
        assert_eq!(paddy.organic_amendment, OrganicAmendment::Straw);
        assert_eq!(paddy.fertilizer_type, "ammonium sulfate");
    }

    #[test]
    fn test_continuous_flooding_credits() {
        let inputs = inputs_from_args(RiceArgs {
            area: 2.0,
            water: WaterRegimeArg::Continuous,
            organic: OrganicArg::None,
            fertilizer: String::new(),
            plot: Some("AG-001".to_string()),
        });
        let result = Engine::builtin().calculate("rice", &inputs).unwrap();

        // (150 - 105) kg/ha * 2 ha * 25 / 1000
        assert!((result.raw_credits_tco2e - 2.25).abs() < 1e-9);
    }
}
