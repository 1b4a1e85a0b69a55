//! Calculate command implementation.

use crate::cli::CalculateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use agrocredit_domain::{CalculationInputs, SpeciesProvider};
use agrocredit_engine::Engine;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Execute the calculate command.
pub fn execute_calculate<P: SpeciesProvider>(
    args: CalculateArgs,
    engine: &Engine<P>,
    formatter: &Formatter,
) -> Result<()> {
    debug!(input = %args.input, kind = %args.kind, "Reading calculation inputs");
    let contents = if args.input == "-" {
        read_stdin()?
    } else {
        fs::read_to_string(&args.input)?
    };

    let inputs = parse_inputs(&contents)?;
    let result = engine.calculate(&args.kind, &inputs)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Parse a JSON inputs document.
fn parse_inputs(contents: &str) -> Result<CalculationInputs> {
    if contents.trim().is_empty() {
        return Err(CliError::InvalidInput("No calculation inputs provided".to_string()));
    }
    Ok(serde_json::from_str(contents)?)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
