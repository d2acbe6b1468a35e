use crate::core::SiteSettings;
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Site configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub agency: AgencyConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub max_body_bytes: Option<usize>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AgencyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML string, substituting `${VAR}` references from the
    /// environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AgencyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as the literal `${VAR}` text.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("agency.name", &self.agency.name)?;
        crate::utils::validation::validate_socket_addr("server.bind", &self.server.bind)?;

        if let Some(max_body_bytes) = self.server.max_body_bytes {
            crate::utils::validation::validate_positive_number(
                "server.max_body_bytes",
                max_body_bytes,
                1,
            )?;
        }

        Ok(())
    }
}

impl SiteSettings for SiteConfig {
    fn agency_name(&self) -> &str {
        &self.agency.name
    }

    fn bind_addr(&self) -> &str {
        &self.server.bind
    }

    fn max_body_bytes(&self) -> usize {
        self.server.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_site_config() {
        let toml_content = r#"
[agency]
name = "Thompson Digital"

[server]
bind = "0.0.0.0:4000"
max_body_bytes = 32768
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.agency.name, "Thompson Digital");
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
        assert_eq!(config.max_body_bytes(), 32768);
    }

    #[test]
    fn test_max_body_bytes_defaults_when_omitted() {
        let toml_content = r#"
[agency]
name = "Thompson Digital"

[server]
bind = "0.0.0.0:4000"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.max_body_bytes(), DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_SITE_BIND", "127.0.0.1:8044");

        let toml_content = r#"
[agency]
name = "Thompson Digital"

[server]
bind = "${TEST_SITE_BIND}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8044");

        std::env::remove_var("TEST_SITE_BIND");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[agency]
name = "  "

[server]
bind = "not-an-address"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        let toml_content = r#"
[agency]
name = "Thompson Digital"

[server]
bind = "0.0.0.0:4000"
max_body_bytes = 0
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[agency]
name = "Thompson Digital"

[server]
bind = "0.0.0.0:4000"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.agency.name, "Thompson Digital");
        assert!(config.validate_config().is_ok());
    }
}
