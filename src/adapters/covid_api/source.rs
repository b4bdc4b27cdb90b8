//! Report source trait definition
//!
//! This module defines the `ReportSource` trait that abstracts where regions,
//! provinces and daily reports come from, so the pipeline can run against the
//! live API or an in-memory stub.

use crate::domain::{Region, Report, Result, State};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only access to regional COVID-19 statistics
///
/// Each call is a single attempt; failures surface as
/// [`FetchError`](crate::domain::FetchError) wrapped in
/// [`AlertsError::Fetch`](crate::domain::AlertsError::Fetch).
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// List every region known to the API
    async fn list_regions(&self) -> Result<Vec<Region>>;

    /// List the states/provinces of the region with ISO code `region_iso`
    async fn list_states(&self, region_iso: &str) -> Result<Vec<State>>;

    /// Fetch the report for one province on `date`
    ///
    /// An empty vector means the API has no data for that day; only the
    /// first entry is meaningful otherwise.
    async fn fetch_state_report(
        &self,
        date: NaiveDate,
        region_name: &str,
        region_province: &str,
    ) -> Result<Vec<Report>>;
}
