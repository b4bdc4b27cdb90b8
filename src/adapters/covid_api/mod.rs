//! COVID-19 statistics API adapter
//!
//! This module provides the read-only integration with the statistics API:
//! the [`ReportSource`] trait the pipeline depends on, the HTTP client that
//! implements it, and the response envelope models.

pub mod client;
pub mod models;
mod source;

pub use client::CovidApiClient;
pub use models::ApiEnvelope;
pub use source::ReportSource;
