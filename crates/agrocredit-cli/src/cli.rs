//! CLI command definitions and argument parsing.

use agrocredit_domain::{OrganicAmendment, WaterRegime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Agrocredit CLI - Estimate carbon credits from agroforestry and rice interventions.
#[derive(Debug, Parser)]
#[command(name = "agrocredit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AGROCREDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (conservative credits only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate credits for a tree stand
    Agroforestry(AgroforestryArgs),

    /// Estimate credits for a rice paddy
    Rice(RiceArgs),

    /// Run a calculation from a JSON inputs file
    Calculate(CalculateArgs),

    /// List the active species reference table
    Species,
}

/// Arguments for the agroforestry command.
#[derive(Debug, Parser)]
pub struct AgroforestryArgs {
    /// Species key (e.g., mango, coconut, teak, neem)
    #[arg(short, long)]
    pub species: String,

    /// Number of trees
    #[arg(short, long)]
    pub trees: u32,

    /// Average diameter at breast height (cm)
    #[arg(short, long)]
    pub dbh: f64,

    /// Average height (m)
    #[arg(long)]
    pub height: f64,

    /// Stand age (years)
    #[arg(short, long)]
    pub age: f64,

    /// Plot identifier
    #[arg(long)]
    pub plot: Option<String>,
}

/// Arguments for the rice command.
#[derive(Debug, Parser)]
pub struct RiceArgs {
    /// Paddy area (hectares)
    #[arg(short, long)]
    pub area: f64,

    /// Water management regime
    #[arg(short, long, value_enum)]
    pub water: WaterRegimeArg,

    /// Organic amendment
    #[arg(short, long, value_enum, default_value = "none")]
    pub organic: OrganicArg,

    /// Fertilizer type
    #[arg(long, default_value = "")]
    pub fertilizer: String,

    /// Plot identifier
    #[arg(long)]
    pub plot: Option<String>,
}

/// Arguments for the calculate command.
#[derive(Debug, Parser)]
pub struct CalculateArgs {
    /// Calculation kind (agroforestry or rice)
    #[arg(short, long)]
    pub kind: String,

    /// JSON file containing calculation inputs ("-" for stdin)
    #[arg(short, long)]
    pub input: String,
}

/// Water regime argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum WaterRegimeArg {
    /// Continuous flooding
    Continuous,
    /// Intermittent irrigation
    Intermittent,
    /// Any other regime
    Other,
}

/// Organic amendment argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OrganicArg {
    /// No organic amendment
    None,
    /// Compost
    Compost,
    /// Rice straw incorporation
    Straw,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<WaterRegimeArg> for WaterRegime {
    fn from(regime: WaterRegimeArg) -> Self {
        match regime {
            WaterRegimeArg::Continuous => WaterRegime::Continuous,
            WaterRegimeArg::Intermittent => WaterRegime::Intermittent,
            WaterRegimeArg::Other => WaterRegime::Other,
        }
    }
}

impl From<OrganicArg> for OrganicAmendment {
    fn from(organic: OrganicArg) -> Self {
        match organic {
            OrganicArg::None => OrganicAmendment::None,
            OrganicArg::Compost => OrganicAmendment::Compost,
            OrganicArg::Straw => OrganicAmendment::Straw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agroforestry_command() {
        let cli = Cli::parse_from([
            "agrocredit",
            "agroforestry",
            "--species",
            "mango",
            "--trees",
            "100",
            "--dbh",
            "25",
            "--height",
            "12",
            "--age",
            "5",
            "--plot",
            "AG-001",
        ]);
        match cli.command {
            Command::Agroforestry(args) => {
                assert_eq!(args.species, "mango");
                assert_eq!(args.trees, 100);
                assert_eq!(args.dbh, 25.0);
                assert_eq!(args.plot.as_deref(), Some("AG-001"));
            }
            _ => panic!("Expected Agroforestry command"),
        }
    }

    #[test]
    fn test_rice_command_defaults() {
        let cli = Cli::parse_from(["agrocredit", "rice", "--area", "2.5", "--water", "intermittent"]);
        match cli.command {
            Command::Rice(args) => {
                assert_eq!(args.area, 2.5);
                assert!(matches!(args.water, WaterRegimeArg::Intermittent));
                assert!(matches!(args.organic, OrganicArg::None));
                assert!(args.fertilizer.is_empty());
            }
            _ => panic!("Expected Rice command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["agrocredit", "species", "--format", "json", "--no-color", "-v"]);
        assert!(matches!(cli.command, Command::Species));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_water_regime_rejected() {
        let result = Cli::try_parse_from(["agrocredit", "rice", "--area", "1", "--water", "flooded"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_regime_conversion() {
        let regime: WaterRegime = WaterRegimeArg::Other.into();
        assert_eq!(regime, WaterRegime::Other);
        let organic: OrganicAmendment = OrganicArg::Straw.into();
        assert_eq!(organic, OrganicAmendment::Straw);
    }
}
