// covid-alerts - COVID-19 case count push notifications
// Copyright (c) 2025 covid-alerts Contributors
// Licensed under the MIT License

//! # covid-alerts
//!
//! covid-alerts is a scheduled batch job that pulls the latest daily COVID-19
//! case counts for a country from a public statistics API and publishes one
//! push notification per province (and optionally per city) to
//! subscriber topics.
//!
//! ## Overview
//!
//! A run:
//! - **Resolves** the configured country against the API's region list
//! - **Fetches** each province's report for `today - date_offset`
//! - **Formats** a notification per province and per listed city
//! - **Dispatches** them in batches of at most 500 through FCM
//!
//! and yields `{"messages": [...]}` or `{"error": "..."}`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Message formatting, dispatch and the run pipeline
//! - [`adapters`] - External integrations (statistics API, FCM)
//! - [`domain`] - Core domain types, topic naming and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use covid_alerts::adapters::messaging::{FcmClient, MessagingClient};
//! use covid_alerts::config::load_config;
//! use covid_alerts::core::pipeline::ReportPipeline;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("covid-alerts.toml")?;
//!
//!     let messaging: Arc<dyn MessagingClient> = Arc::new(FcmClient::new(&config.messaging)?);
//!     let pipeline = ReportPipeline::from_config(&config, messaging)?;
//!
//!     let run = pipeline.run().await;
//!     println!("{}", serde_json::to_string(&run.outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Scheduled Invocation
//!
//! ```rust,no_run
//! use covid_alerts::config::{AlertsConfig, Invocation};
//! use covid_alerts::core::pipeline::invoke;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let invocation = Invocation::from_json(
//!     r#"{"GOOGLE_APPLICATION_CREDENTIALS":"/secrets/sa.json","COUNTRY":"Brazil","DATE_OFFSET":"1"}"#,
//! )?;
//! let outcome = invoke(AlertsConfig::default(), &invocation).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::Result`], an alias over [`domain::AlertsError`].
//! The pipeline folds every error into its outcome instead of failing.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
