//! Agroforestry command implementation.

use crate::cli::AgroforestryArgs;
use crate::error::Result;
use crate::output::Formatter;
use agrocredit_domain::{CalculationInputs, SpeciesProvider, TreeMeasurement};
use agrocredit_engine::Engine;

/// Execute the agroforestry command.
pub fn execute_agroforestry<P: SpeciesProvider>(
    args: AgroforestryArgs,
    engine: &Engine<P>,
    formatter: &Formatter,
) -> Result<()> {
    let inputs = inputs_from_args(args);
    let result = engine.calculate("agroforestry", &inputs)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Build calculation inputs from command arguments.
fn inputs_from_args(args: AgroforestryArgs) -> CalculationInputs {
    let inputs = CalculationInputs::agroforestry(TreeMeasurement {
        species_key: args.species,
        tree_count: args.trees,
        avg_diameter_cm: args.dbh,
        avg_height_m: args.height,
        stand_age_years: args.age,
    });

    match args.plot {
        Some(plot) => inputs.with_plot_id(plot),
        None => inputs,
    }
}
