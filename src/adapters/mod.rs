//! External system integrations for covid-alerts.
//!
//! This module provides adapters for the two services a run talks to:
//!
//! - [`covid_api`] - COVID-19 statistics API (regions, provinces, reports)
//! - [`messaging`] - Topic-based push messaging (FCM HTTP v1)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. Both are exposed through traits
//! ([`covid_api::ReportSource`], [`messaging::MessagingClient`]) that the
//! pipeline holds as `Arc<dyn Trait>`.
//!
//! ```rust,no_run
//! use covid_alerts::adapters::covid_api::{CovidApiClient, ReportSource};
//! use covid_alerts::adapters::messaging::{FcmClient, MessagingClient};
//! use covid_alerts::config::AlertsConfig;
//! use std::sync::Arc;
//!
//! # fn example(config: &AlertsConfig) -> covid_alerts::domain::Result<()> {
//! let source: Arc<dyn ReportSource> = Arc::new(CovidApiClient::new(&config.api)?);
//! let messaging: Arc<dyn MessagingClient> = Arc::new(FcmClient::new(&config.messaging)?);
//! # Ok(())
//! # }
//! ```

pub mod covid_api;
pub mod messaging;
