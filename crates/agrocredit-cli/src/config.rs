//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use agrocredit_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest supported `settings.decimals`; f64 carries about 15 significant digits
pub const MAX_DECIMALS: u32 = 15;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Engine settings (species table source)
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimal places for displayed figures
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (conservative credits only)
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".agrocredit").join("config.toml"))
    }

    /// Load configuration from `path`, or the default location if `None`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.settings.decimals > MAX_DECIMALS {
            return Err(CliError::Config(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, config.settings.decimals
            )));
        }
        config.engine.validate()?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            decimals: 2,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_decimals() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.decimals, 2);
        assert!(config.engine.species_table.is_none());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.decimals, 2);
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"
            decimals = 3

            [engine]
            species_table = "species.toml"
            extend_builtin = true
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.decimals, 3);
        assert!(config.settings.color);
        assert!(config.engine.extend_builtin);
    }

    #[test]
    fn test_invalid_engine_section_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[engine]\nextend_builtin = true\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Engine(_))));
    }

    #[test]
    fn test_decimals_capped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[settings]\ndecimals = 400\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));

        fs::write(&path, "[settings]\ndecimals = 15\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().settings.decimals, 15);
    }
}
