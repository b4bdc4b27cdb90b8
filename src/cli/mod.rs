//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for covid-alerts using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// covid-alerts - COVID-19 case count push notifications
#[derive(Parser, Debug)]
#[command(name = "covid-alerts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "covid-alerts.toml", env = "COVID_ALERTS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COVID_ALERTS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the latest reports and send notifications
    Run(commands::run::RunArgs),

    /// Run once from a JSON invocation object
    Invoke(commands::invoke::InvokeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
