//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Sample configuration written by `init`
pub const SAMPLE_CONFIG: &str = r#"# covid-alerts Configuration File
#
# Values of the form ${VAR} are replaced from the environment when loaded.
# Any key can also be overridden with COVID_ALERTS_<SECTION>_<KEY>.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Build messages without sending them
dry_run = false

[api]
base_url = "https://covid-api.com/api"
timeout_seconds = 30

[report]
# Country name as listed by the statistics API (case-insensitive)
country = "Brazil"

# Report date is today minus this many days
date_offset = 1

# Also send one message per city of each province
include_cities = true

[messaging]
# Service account file path or inline JSON
credentials = "${GOOGLE_APPLICATION_CREDENTIALS}"

# OAuth2 bearer token for the FCM HTTP v1 API
access_token = "${FCM_ACCESS_TOKEN}"

# Defaults to the project_id found in the credentials
# project_id = "my-firebase-project"

endpoint = "https://fcm.googleapis.com"
send_in_batches = true
max_batch_size = 500
timeout_seconds = 30

[logging]
local_enabled = false
local_path = "/var/log/covid-alerts"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "covid-alerts.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing covid-alerts configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set GOOGLE_APPLICATION_CREDENTIALS");
                println!("     - Set FCM_ACCESS_TOKEN");
                println!("  3. Validate configuration: covid-alerts validate-config");
                println!("  4. Try a dry run: covid-alerts run --dry-run --pretty");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}
