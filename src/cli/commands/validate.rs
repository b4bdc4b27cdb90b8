//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the covid-alerts configuration file.

use super::EXIT_CONFIG_ERROR;
use crate::config::{load_config_unvalidated, AlertsConfig};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config_unvalidated(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                print!("{}", Self::summary(&config));
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_CONFIG_ERROR)
            }
        }
    }

    /// Human-readable configuration summary; secrets are never shown
    fn summary(config: &AlertsConfig) -> String {
        let credentials = match config.messaging.credentials {
            Some(ref c) if c.expose_secret().as_ref().trim_start().starts_with('{') => "inline JSON",
            Some(_) => "file path",
            None => "not set",
        };
        let access_token = if config.messaging.access_token.is_some() {
            "set"
        } else {
            "not set"
        };

        let mut out = String::from("Configuration Summary:\n");
        out.push_str(&format!("  Log Level: {}\n", config.application.log_level));
        out.push_str(&format!("  Dry Run: {}\n", config.application.dry_run));
        out.push_str(&format!("  Statistics API: {}\n", config.api.base_url));
        out.push_str(&format!("  Country: {}\n", config.report.country));
        out.push_str(&format!("  Date Offset: {} day(s)\n", config.report.date_offset));
        out.push_str(&format!("  Include Cities: {}\n", config.report.include_cities));
        out.push_str(&format!("  Messaging Endpoint: {}\n", config.messaging.endpoint));
        out.push_str(&format!("  Credentials: {credentials}\n"));
        out.push_str(&format!("  Access Token: {access_token}\n"));
        out.push_str(&format!(
            "  Send In Batches: {} (max {} per batch)\n",
            config.messaging.send_in_batches, config.messaging.max_batch_size
        ));
        out
    }
}
