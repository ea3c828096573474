//! Configuration management for Keywarden services

use serde::Deserialize;
use std::env;

/// Default report file name, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "kms_key_compliance_report.csv";

/// Report sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
}

/// Application configuration
///
/// The rotation-period threshold is a policy constant, not configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    pub report: ReportConfig,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl AuditConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let output_path =
            env::var("REPORT_OUTPUT_PATH").unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            report: ReportConfig { output_path },
            log_level: Some(log_level),
            log_json,
        })
    }

    /// Get the report output path
    pub fn report_output_path(&self) -> &str {
        &self.report.output_path
    }

    /// Get log level, defaulting to "info"
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_accessor() {
        let config = AuditConfig {
            report: ReportConfig {
                output_path: DEFAULT_REPORT_PATH.to_string(),
            },
            log_level: None,
            log_json: false,
        };

        assert_eq!(config.report_output_path(), "kms_key_compliance_report.csv");
        assert_eq!(config.log_level(), "info");
    }
}
