//! HTTP client for the COVID-19 statistics API

use super::models::ApiEnvelope;
use super::ReportSource;
use crate::config::ApiConfig;
use crate::domain::{AlertsError, FetchError, Region, Report, Result, State};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Date format expected by the `/reports` endpoint
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Statistics API client
///
/// # Example
///
/// ```no_run
/// use covid_alerts::adapters::covid_api::{CovidApiClient, ReportSource};
/// use covid_alerts::config::ApiConfig;
///
/// # async fn example() -> covid_alerts::domain::Result<()> {
/// let client = CovidApiClient::new(&ApiConfig::default())?;
/// let regions = client.list_regions().await?;
/// println!("{} regions", regions.len());
/// # Ok(())
/// # }
/// ```
pub struct CovidApiClient {
    /// Base URL without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl CovidApiClient {
    /// Create a client from the `[api]` configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AlertsError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request and unwrap the `data` envelope
    async fn get_data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Vec<T>> {
        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::ServerError {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let envelope = resp
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        Ok(envelope.into_data())
    }
}

#[async_trait]
impl ReportSource for CovidApiClient {
    async fn list_regions(&self) -> Result<Vec<Region>> {
        let url = format!("{}/regions", self.base_url);
        tracing::debug!(url = %url, "Requesting regions");

        let regions: Vec<Region> = self.get_data(self.client.get(&url)).await?;

        tracing::info!(count = regions.len(), "Received regions from covid api");
        Ok(regions)
    }

    async fn list_states(&self, region_iso: &str) -> Result<Vec<State>> {
        let url = format!("{}/provinces/{}", self.base_url, region_iso);
        tracing::debug!(url = %url, "Requesting provinces");

        let states: Vec<State> = self.get_data(self.client.get(&url)).await?;

        tracing::info!(
            region_iso = %region_iso,
            count = states.len(),
            "Received states from covid api"
        );
        Ok(states)
    }

    async fn fetch_state_report(
        &self,
        date: NaiveDate,
        region_name: &str,
        region_province: &str,
    ) -> Result<Vec<Report>> {
        let url = format!("{}/reports", self.base_url);
        let date = date.format(REPORT_DATE_FORMAT).to_string();

        tracing::debug!(
            url = %url,
            date = %date,
            region_name = %region_name,
            region_province = %region_province,
            "Requesting report"
        );

        let request = self.client.get(&url).query(&[
            ("date", date.as_str()),
            ("region_name", region_name),
            ("region_province", region_province),
        ]);
        let reports: Vec<Report> = self.get_data(request).await?;

        tracing::info!(
            region_province = %region_province,
            count = reports.len(),
            "Received report from covid api"
        );
        Ok(reports)
    }
}
