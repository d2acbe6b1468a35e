pub mod site_config;

use crate::core::SiteSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_socket_addr, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "thompson-digital")]
#[command(about = "Contact inquiry API for the Thompson Digital site")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0:4000")]
    pub bind: String,

    #[arg(long, help = "Load settings from a TOML site config instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = "16384")]
    pub max_body_bytes: usize,

    #[arg(long, default_value = "Thompson Digital")]
    pub agency_name: String,

    #[arg(long, help = "Emit JSON logs")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SiteSettings for CliConfig {
    fn agency_name(&self) -> &str {
        &self.agency_name
    }

    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_positive_number("max_body_bytes", self.max_body_bytes, 1)?;
        validate_non_empty_string("agency_name", &self.agency_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_are_valid() {
        let config = CliConfig::parse_from(["thompson-digital"]);
        assert_eq!(config.bind, "0.0.0.0:4000");
        assert_eq!(config.agency_name, "Thompson Digital");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_bind() {
        let config = CliConfig::parse_from(["thompson-digital", "--bind", "nowhere"]);
        assert!(config.validate().is_err());
    }
}
