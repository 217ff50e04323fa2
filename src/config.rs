//! Configuration module for MeetingForge
//!
//! This module handles loading and validating configuration from environment
//! variables, providing strongly-typed configuration structures.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pipeline::MeetingPipeline;

/// Environments accepted in `ENVIRONMENT`
const ENVIRONMENTS: [&str; 4] = ["development", "test", "staging", "production"];

/// Main configuration structure for MeetingForge
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Logging configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub logging: LoggingConfig,

    /// Organization configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub organization: OrganizationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct LoggingConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, test, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl LoggingConfig {
    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Organization configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct OrganizationConfig {
    /// Email domain meeting contacts must belong to
    #[envconfig(from = "ORGANIZATION_EMAIL_DOMAIN", default = "acme.org")]
    pub email_domain: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !ENVIRONMENTS.contains(&self.logging.environment.as_str()) {
            return Err(Error::config(format!(
                "Unknown environment '{}'",
                self.logging.environment
            )));
        }

        let domain = &self.organization.email_domain;
        if domain.trim().is_empty() {
            return Err(Error::config("Organization email domain cannot be empty"));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(Error::config(format!(
                "Organization email domain '{}' is not a bare domain",
                domain
            )));
        }

        Ok(())
    }

    /// Build the default pipeline for the configured organization
    pub fn pipeline(&self) -> MeetingPipeline {
        MeetingPipeline::new().organization_domain(self.organization.email_domain.clone())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.logging.environment,
            log_level = %self.logging.log_level,
            organization_domain = %self.organization.email_domain,
            "Configuration loaded"
        );
    }
}
