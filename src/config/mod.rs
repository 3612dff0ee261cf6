pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_FILE_NAME: &str = "ShopData.json";

/// Fully resolved settings: built-in defaults, overlaid by an optional TOML
/// file, overlaid by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub data_dir: String,
    pub file_name: String,
    pub atomic_writes: bool,
    pub log_level: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            atomic_writes: true,
            log_level: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_toml(toml: &TomlConfig) -> Result<Self> {
        toml.validate()?;

        let defaults = Self::default();
        Ok(Self {
            data_dir: toml.data_dir().map(str::to_string).unwrap_or(defaults.data_dir),
            file_name: toml.file_name().map(str::to_string).unwrap_or(defaults.file_name),
            atomic_writes: toml.atomic_writes().unwrap_or(defaults.atomic_writes),
            log_level: toml.log_level().map(str::to_ascii_lowercase),
        })
    }
}

impl ConfigProvider for CatalogConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_file_name("file_name", &self.file_name)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shoptimal")]
#[command(about = "Export and import shop catalogue data as JSON")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Directory holding the data file [default: .]")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Data file name [default: ShopData.json]")]
    pub file_name: Option<String>,

    #[arg(short, long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Write the data file in place instead of via a temp file")]
    pub no_atomic: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write the sample data, read it back and check it survived intact
    RoundTrip,
    /// Write the sample data
    Export,
    /// Read the data file and print a summary
    Import,
    /// Print every shop and its catalogue
    Show,
    /// Report shopping-list items that no shop sells
    Check {
        #[arg(required = true)]
        items: Vec<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::RoundTrip)
    }

    /// Layers the command-line flags over the TOML file (if any) and the
    /// built-in defaults.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_toml(&TomlConfig::from_file(path)?)?,
            None => CatalogConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(file_name) = &self.file_name {
            config.file_name = file_name.clone();
        }
        if self.no_atomic {
            config.atomic_writes = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_overlays_defaults() {
        let toml = TomlConfig::from_toml_str("[storage]\ndata_dir = \"./data\"\n").unwrap();
        let config = CatalogConfig::from_toml(&toml).unwrap();

        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.file_name, DEFAULT_FILE_NAME);
        assert!(config.atomic_writes);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let toml = TomlConfig::from_toml_str("[storage]\nfile_name = \"\"\n").unwrap();
        assert!(CatalogConfig::from_toml(&toml).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_defaults_to_round_trip() {
        let cli = CliConfig::parse_from(["shoptimal"]);
        assert_eq!(cli.command(), Command::RoundTrip);

        let config = cli.resolve().unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_toml() {
        use std::io::Write;

        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"./from-file\"\nfile_name = \"File.json\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap();

        let cli = CliConfig::parse_from([
            "shoptimal",
            "--config",
            config_path,
            "--file-name",
            "Flag.json",
            "--no-atomic",
            "export",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(cli.command(), Command::Export);
        assert_eq!(config.data_dir, "./from-file");
        assert_eq!(config.file_name, "Flag.json");
        assert!(!config.atomic_writes);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_check_requires_items() {
        assert!(CliConfig::try_parse_from(["shoptimal", "check"]).is_err());

        let cli = CliConfig::parse_from(["shoptimal", "check", "Milk", "Tea"]);
        assert_eq!(
            cli.command(),
            Command::Check {
                items: vec!["Milk".to_string(), "Tea".to_string()]
            }
        );
    }
}
