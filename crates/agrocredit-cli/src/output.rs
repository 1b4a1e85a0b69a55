//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use agrocredit_domain::{round_to, CalculationKind, CalculationResult, Measurement, SpeciesTable};
use agrocredit_engine::ConservativenessPolicy;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    decimals: usize,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, decimals: u32) -> Self {
        Self {
            format,
            color_enabled,
            decimals: decimals as usize,
        }
    }

    /// Format a calculation result.
    pub fn format_result(&self, result: &CalculationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(self.number(result.conservative_credits_tco2e)),
        }
    }

    /// Format the species reference table.
    pub fn format_species(&self, table: &SpeciesTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = table.iter().collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Table => Ok(self.format_species_table(table)),
            OutputFormat::Quiet => {
                let keys: Vec<&str> = table.iter().map(|s| s.species_key.as_str()).collect();
                Ok(keys.join("\n"))
            }
        }
    }

    /// Summary table followed by the calculation details.
    fn format_result_table(&self, result: &CalculationResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Total Carbon Credits", "Conservative Estimate", "Uncertainty (±)"]);
        builder.push_record([
            self.number(result.raw_credits_tco2e),
            self.number(result.conservative_credits_tco2e),
            format!("±{}", self.number(result.uncertainty_tco2e)),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(..)).with(Alignment::center()));

        let mut lines = vec![
            table.to_string(),
            String::new(),
            self.colorize("Calculation Details:", "cyan"),
        ];
        if let Some(plot_id) = &result.plot_id {
            lines.push(format!("• Plot: {}", plot_id));
        }
        lines.extend(self.detail_lines(result));

        let policy = ConservativenessPolicy::for_kind(result.kind);
        lines.push(String::new());
        lines.push(self.info(&format!(
            "Uncertainty is a {} approximation ({:.0}% of raw credits); methodology {}",
            policy.method(),
            policy.uncertainty_fraction * 100.0,
            result.methodology_version
        )));

        lines.join("\n")
    }

    fn detail_lines(&self, result: &CalculationResult) -> Vec<String> {
        let mut lines = Vec::new();
        match result.kind {
            CalculationKind::Agroforestry => {
                lines.push(format!(
                    "• Biomass Carbon: {} kg",
                    self.number(result.primary_quantity_kg())
                ));
            }
            CalculationKind::Rice => {
                lines.push(format!(
                    "• Methane Reduction: {} kg CH4",
                    self.number(result.primary_quantity_kg())
                ));
            }
        }
        lines.push(format!(
            "• CO2 Equivalent: {} kg CO2e",
            self.number(result.co2_equivalent_kg)
        ));

        match &result.inputs_snapshot {
            Measurement::Agroforestry(trees) => {
                let species = result.species_name.as_deref().unwrap_or(&trees.species_key);
                lines.push(format!("• Species: {}", species));
                lines.push(format!("• Tree Count: {}", trees.tree_count));
            }
            Measurement::Rice(paddy) => {
                lines.push(format!("• Area: {} hectares", paddy.area_hectares));
                lines.push(format!("• Water Management: {}", paddy.water_regime.as_str()));
                lines.push(format!(
                    "• Organic Amendment: {}",
                    paddy.organic_amendment.as_str()
                ));
                if !paddy.fertilizer_type.is_empty() {
                    lines.push(format!("• Fertilizer: {}", paddy.fertilizer_type));
                }
            }
        }
        lines
    }

    fn format_species_table(&self, table: &SpeciesTable) -> String {
        if table.is_empty() {
            return self.colorize("No species configured.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Name", "a", "b"]);
        for species in table.iter() {
            builder.push_record([
                species.species_key.clone(),
                species.display_name.clone(),
                species.allometric_a.to_string(),
                species.allometric_b.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Round half away from zero, then pad to the configured precision.
    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, round_to(value, self.decimals as u32))
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
