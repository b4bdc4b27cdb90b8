//! Run command implementation
//!
//! This module implements the `run` command: one notification run using the
//! configuration file plus command-line overrides.

use super::{print_outcome, EXIT_CONFIG_ERROR};
use crate::adapters::messaging::{FcmClient, MessagingClient};
use crate::config::{load_config_unvalidated, AlertsConfig};
use crate::core::pipeline::ReportPipeline;
use clap::Args;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Override the country to report on
    #[arg(long)]
    pub country: Option<String>,

    /// Override the number of days subtracted from today
    #[arg(long)]
    pub date_offset: Option<i64>,

    /// Only send province-level messages
    #[arg(long)]
    pub no_cities: bool,

    /// Build messages without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Pretty-print the outcome JSON
    #[arg(long)]
    pub pretty: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting run command");

        let mut config = match load_config_unvalidated(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let messaging: Arc<dyn MessagingClient> = Arc::new(FcmClient::new(&config.messaging)?);
        let pipeline = ReportPipeline::from_config(&config, messaging)?;

        let run = pipeline.run().await;
        if let Some(ref report) = run.dispatch {
            if !report.is_successful() {
                eprintln!(
                    "Warning: {} of {} dispatch batches failed",
                    report.failed_count(),
                    report.outcomes.len()
                );
            }
        }

        print_outcome(&run.outcome, self.pretty)
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&self, config: &mut AlertsConfig) {
        if let Some(ref country) = self.country {
            tracing::info!(country = %country, "Overriding country from CLI");
            config.report.country = country.clone();
        }

        if let Some(offset) = self.date_offset {
            tracing::info!(date_offset = offset, "Overriding date offset from CLI");
            config.report.date_offset = offset;
        }

        if self.no_cities {
            config.report.include_cities = false;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }
}
