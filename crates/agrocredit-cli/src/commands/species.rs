//! Species command implementation.

use crate::error::Result;
use crate::output::Formatter;
use agrocredit_domain::SpeciesProvider;
use agrocredit_engine::Engine;

/// Execute the species command.
pub fn execute_species<P: SpeciesProvider>(engine: &Engine<P>, formatter: &Formatter) -> Result<()> {
    let table = engine.species_table();
    println!("{}", formatter.format_species(&table)?);
    Ok(())
}
