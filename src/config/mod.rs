pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "sample-doc")]
#[command(about = "Prints the sample document fixture report")]
pub struct CliConfig {
    /// TOML fixture file; the built-in sample document is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dump the built document as JSON after the report
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_fixture(&self) -> crate::Result<toml_config::FixtureConfig> {
        match &self.config {
            Some(path) => toml_config::FixtureConfig::from_file(path),
            None => Ok(toml_config::FixtureConfig::default()),
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_default() {
        let config = CliConfig::parse_from(["sample-doc"]);
        assert!(config.config.is_none());
        assert!(!config.json);
        assert!(!config.verbose);
        assert_eq!(config.load_fixture().unwrap(), toml_config::FixtureConfig::default());
    }

    #[test]
    fn test_flags_parse() {
        let config = CliConfig::parse_from(["sample-doc", "-c", "fixture.toml", "--json", "-v"]);
        assert_eq!(config.config.as_deref(), Some("fixture.toml"));
        assert!(config.json);
        assert!(config.verbose);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let config = CliConfig {
            config: Some("/nonexistent/sample-doc/fixture.toml".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.load_fixture(),
            Err(crate::FixtureError::IoError(_))
        ));
    }
}
