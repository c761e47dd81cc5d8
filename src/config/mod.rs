pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kit-orders")]
#[command(about = "Place DNA testing kit orders against an in-memory catalog")]
pub struct CliConfig {
    /// TOML session file with catalog kits and orders to place
    #[arg(long)]
    pub config: Option<String>,

    /// CSV catalog with a kit_id,variant,base_price header
    #[arg(long)]
    pub catalog: Option<String>,

    /// Only list the orders of this customer
    #[arg(long)]
    pub customer: Option<i32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print orders as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::parse_from([
            "kit-orders",
            "--config",
            "session.toml",
            "--customer",
            "7",
            "--json",
        ]);

        assert_eq!(config.config.as_deref(), Some("session.toml"));
        assert_eq!(config.catalog, None);
        assert_eq!(config.customer, Some(7));
        assert!(config.json);
        assert!(!config.json_logs);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_logs_is_independent_of_json_output() {
        let config = CliConfig::parse_from(["kit-orders", "--json-logs"]);
        assert!(config.json_logs);
        assert!(!config.json);
    }

    #[test]
    fn test_empty_catalog_path_rejected() {
        let config = CliConfig::parse_from(["kit-orders", "--catalog", ""]);
        assert!(config.validate().is_err());
    }
}
