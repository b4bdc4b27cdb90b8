//! Core business logic for covid-alerts.
//!
//! # Modules
//!
//! - [`notify`] - Message formatting, batching and dispatch
//! - [`pipeline`] - Run orchestration and the invoker-facing outcome
//!
//! # Run Workflow
//!
//! 1. **Resolve region**: list regions, match the configured country
//! 2. **List provinces** for the region ISO code
//! 3. **Fetch reports** for `today - date_offset`, one province at a time
//! 4. **Format** a state message per report, plus city messages when enabled
//! 5. **Dispatch** in batches of at most 500 (skipped on dry runs)
//! 6. **Report** `{messages}` or `{error}`
//!
//! # Example
//!
//! ```rust,no_run
//! use covid_alerts::adapters::covid_api::CovidApiClient;
//! use covid_alerts::adapters::messaging::FcmClient;
//! use covid_alerts::config::load_config;
//! use covid_alerts::core::notify::{DispatchConfig, NotificationDispatcher};
//! use covid_alerts::core::pipeline::{PipelineOptions, ReportPipeline};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("covid-alerts.toml")?;
//!
//! let dispatcher = NotificationDispatcher::new(
//!     Arc::new(FcmClient::new(&config.messaging)?),
//!     DispatchConfig::from_config(&config.messaging),
//! );
//! let pipeline = ReportPipeline::new(
//!     Arc::new(CovidApiClient::new(&config.api)?),
//!     dispatcher,
//!     PipelineOptions::from_config(&config),
//! );
//!
//! let run = pipeline.run().await;
//! if let Some(report) = run.dispatch {
//!     println!("Delivered {} of {} batches", report.delivered_count(), report.outcomes.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod notify;
pub mod pipeline;
