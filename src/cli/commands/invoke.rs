//! Invoke command implementation
//!
//! This module implements the `invoke` command used by a scheduler: it reads
//! a JSON object such as `{"COUNTRY": "Brazil", "DATE_OFFSET": "1",
//! "GOOGLE_APPLICATION_CREDENTIALS": "..."}` and prints the outcome JSON.
//!
//! Stdout always carries `{"messages": [...]}` or `{"error": "..."}`, even when
//! the parameters or the configuration cannot be read.

use super::{write_outcome, EXIT_CONFIG_ERROR};
use crate::config::{load_config_or_defaults, AlertsConfig, Invocation};
use crate::core::pipeline::{invoke, PipelineOutcome};
use crate::domain::{AlertsError, Result};
use crate::log_error_with_context;
use clap::Args;
use std::io::{Read, Write};

/// Arguments for the invoke command
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Path to the invocation JSON, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub params: String,

    /// Pretty-print the outcome JSON
    #[arg(long)]
    pub pretty: bool,
}

impl InvokeArgs {
    /// Execute the invoke command
    ///
    /// The configuration file is optional here; when it is missing, defaults
    /// and environment variables are used.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        self.execute_to(config_path, &mut std::io::stdout()).await
    }

    async fn execute_to<W: Write>(&self, config_path: &str, out: &mut W) -> anyhow::Result<i32> {
        tracing::info!(params = %self.params, "Starting invoke command");

        match self.prepare(config_path) {
            Ok((config, invocation)) => {
                let outcome = invoke(config, &invocation).await;
                write_outcome(out, &outcome, self.pretty)
            }
            Err(e) => {
                log_error_with_context!(&e, "Failed to prepare invocation");
                write_outcome(out, &PipelineOutcome::from_error(&e), self.pretty)?;
                Ok(EXIT_CONFIG_ERROR)
            }
        }
    }

    /// Read the invocation parameters and the configuration they overlay
    fn prepare(&self, config_path: &str) -> Result<(AlertsConfig, Invocation)> {
        let invocation = Invocation::from_json(&self.read_params()?)?;
        let config = load_config_or_defaults(config_path)?;
        Ok((config, invocation))
    }

    fn read_params(&self) -> Result<String> {
        let raw = if self.params == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
        } else {
            std::fs::read_to_string(&self.params)
        };

        raw.map_err(|e| {
            AlertsError::Io(format!(
                "Failed to read invocation parameters from {}: {e}",
                self.params
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    fn params_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn args_for(file: &NamedTempFile) -> InvokeArgs {
        InvokeArgs {
            params: file.path().to_string_lossy().to_string(),
            pretty: false,
        }
    }

    async fn run(args: &InvokeArgs, config_path: &str) -> (i32, Value) {
        let mut out = Vec::new();
        let code = args.execute_to(config_path, &mut out).await.unwrap();
        (code, serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_read_params_from_file() {
        let file = params_file(r#"{"COUNTRY":"Brazil"}"#);
        assert_eq!(args_for(&file).read_params().unwrap(), r#"{"COUNTRY":"Brazil"}"#);
    }

    #[tokio::test]
    async fn test_invalid_json_prints_error_outcome() {
        let file = params_file("not json");

        let (code, output) = run(&args_for(&file), "no-such-covid-alerts.toml").await;

        assert_eq!(code, EXIT_CONFIG_ERROR);
        let error = output["error"].as_str().unwrap();
        assert!(error.starts_with("Error loading reports: Serialization error"));
        assert!(output.get("messages").is_none());
    }

    #[tokio::test]
    async fn test_non_numeric_offset_prints_error_outcome() {
        let file = params_file(r#"{"COUNTRY":"Brazil","DATE_OFFSET":"yesterday"}"#);

        let (code, output) = run(&args_for(&file), "no-such-covid-alerts.toml").await;

        assert_eq!(code, EXIT_CONFIG_ERROR);
        assert!(output["error"]
            .as_str()
            .unwrap()
            .contains("DATE_OFFSET must be an integer"));
    }

    #[tokio::test]
    async fn test_unreadable_config_prints_error_outcome() {
        let file = params_file(r#"{"COUNTRY":"Brazil"}"#);
        let config = params_file("[report]\ncountry = \"${COVID_ALERTS_TEST_UNSET_VARIABLE}\"\n");

        let (code, output) = run(&args_for(&file), &config.path().to_string_lossy()).await;

        assert_eq!(code, EXIT_CONFIG_ERROR);
        let error = output["error"].as_str().unwrap();
        assert!(error.starts_with("Error loading reports: Configuration error"));
        assert!(error.contains("COVID_ALERTS_TEST_UNSET_VARIABLE"));
    }

    #[tokio::test]
    async fn test_missing_params_file_prints_error_outcome() {
        let args = InvokeArgs {
            params: "/nonexistent/params.json".to_string(),
            pretty: false,
        };

        let (code, output) = run(&args, "no-such-covid-alerts.toml").await;

        assert_eq!(code, EXIT_CONFIG_ERROR);
        let error = output["error"].as_str().unwrap();
        assert!(error.starts_with("Error loading reports: I/O error"));
        assert!(error.contains("/nonexistent/params.json"));
    }
}
