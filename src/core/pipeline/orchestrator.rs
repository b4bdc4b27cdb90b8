//! Pipeline orchestrator - main entry point for a notification run
//!
//! A run resolves the configured country, lists its provinces, fetches each
//! province's report for the target date, builds messages and dispatches them.

use super::outcome::PipelineOutcome;
use crate::adapters::covid_api::{CovidApiClient, ReportSource};
use crate::adapters::messaging::{FcmClient, MessagingClient};
use crate::config::{AlertsConfig, Invocation};
use crate::core::notify::{
    generate_city_message, generate_state_message, DispatchConfig, DispatchReport,
    NotificationDispatcher,
};
use crate::domain::{find_region, AlertsError, EmptyResult, Message, Result};
use crate::log_error_with_context;
use chrono::{Duration, Local, NaiveDate};
use std::sync::Arc;
use std::time::Instant;

/// Per-run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Country name, matched case-insensitively
    pub country: String,
    /// Days subtracted from today
    pub date_offset: i64,
    /// Add one message per city of each province report
    pub include_cities: bool,
    /// Build messages without dispatching them
    pub dry_run: bool,
}

impl PipelineOptions {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            date_offset: 1,
            include_cities: true,
            dry_run: false,
        }
    }

    pub fn from_config(config: &AlertsConfig) -> Self {
        Self {
            country: config.report.country.clone(),
            date_offset: config.report.date_offset,
            include_cities: config.report.include_cities,
            dry_run: config.application.dry_run,
        }
    }

    /// Report date for a run happening on `today`
    pub fn target_date(&self, today: NaiveDate) -> Result<NaiveDate> {
        today
            .checked_sub_signed(Duration::days(self.date_offset))
            .ok_or_else(|| {
                AlertsError::Configuration(format!(
                    "date_offset {} is out of range",
                    self.date_offset
                ))
            })
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub outcome: PipelineOutcome,
    /// Present when messages were dispatched
    pub dispatch: Option<DispatchReport>,
}

/// Sequences fetch, format and dispatch
pub struct ReportPipeline {
    source: Arc<dyn ReportSource>,
    dispatcher: NotificationDispatcher,
    options: PipelineOptions,
}

impl ReportPipeline {
    pub fn new(
        source: Arc<dyn ReportSource>,
        dispatcher: NotificationDispatcher,
        options: PipelineOptions,
    ) -> Self {
        Self {
            source,
            dispatcher,
            options,
        }
    }

    /// Build a pipeline against the live statistics API
    ///
    /// The messaging client is supplied by the caller so that its lazily
    /// built session can outlive a single run.
    pub fn from_config(config: &AlertsConfig, messaging: Arc<dyn MessagingClient>) -> Result<Self> {
        let source: Arc<dyn ReportSource> = Arc::new(CovidApiClient::new(&config.api)?);
        let dispatcher =
            NotificationDispatcher::new(messaging, DispatchConfig::from_config(&config.messaging));

        Ok(Self::new(source, dispatcher, PipelineOptions::from_config(config)))
    }

    /// Run for the current local date
    pub async fn run(&self) -> PipelineRun {
        self.execute_on(Local::now().date_naive()).await
    }

    /// Run as if today were `today`
    ///
    /// Never fails; errors are folded into the outcome. Dispatch failures do
    /// not change the returned messages.
    pub async fn execute_on(&self, today: NaiveDate) -> PipelineRun {
        let start_time = Instant::now();

        tracing::info!(
            country = %self.options.country,
            date_offset = self.options.date_offset,
            include_cities = self.options.include_cities,
            dry_run = self.options.dry_run,
            "Starting notification run"
        );

        let messages = match self.load_messages(today).await {
            Ok(messages) => messages,
            Err(e) => {
                log_error_with_context!(&e, "Notification run failed");
                return PipelineRun {
                    outcome: PipelineOutcome::from_error(&e),
                    dispatch: None,
                };
            }
        };

        let dispatch = if self.options.dry_run {
            tracing::info!(
                message_count = messages.len(),
                "Dry run: skipping dispatch"
            );
            None
        } else {
            let report = self.dispatcher.send_messages(&messages).await;
            report.log_summary();
            Some(report)
        };

        tracing::info!(
            message_count = messages.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Notification run completed"
        );

        PipelineRun {
            outcome: PipelineOutcome::messages(messages),
            dispatch,
        }
    }

    /// Fetch and format every message for the run
    async fn load_messages(&self, today: NaiveDate) -> Result<Vec<Message>> {
        let regions = self.source.list_regions().await?;
        if regions.is_empty() {
            return Err(EmptyResult::NoRegions.into());
        }

        let region = find_region(&regions, &self.options.country)
            .ok_or_else(|| AlertsError::RegionNotFound(self.options.country.clone()))?;

        let states = self.source.list_states(&region.iso).await?;
        if states.is_empty() {
            return Err(EmptyResult::NoStates.into());
        }

        let date = self.options.target_date(today)?;
        tracing::debug!(
            region = %region.name,
            iso = %region.iso,
            state_count = states.len(),
            date = %date,
            "Fetching state reports"
        );

        let mut messages = Vec::new();
        for state in &states {
            let reports = self
                .source
                .fetch_state_report(date, &region.name, &state.province)
                .await?;

            let Some(report) = reports.first() else {
                tracing::debug!(province = %state.province, "No report for province");
                continue;
            };

            messages.push(generate_state_message(report));
            if self.options.include_cities {
                messages.extend(
                    report
                        .region
                        .cities
                        .iter()
                        .map(|city| generate_city_message(report, city)),
                );
            }
        }

        if messages.is_empty() {
            return Err(EmptyResult::NoReports.into());
        }

        Ok(messages)
    }
}

/// Entry point for a scheduled invocation
///
/// Overlays `invocation` onto `config`, validates, builds the live clients and
/// runs once. Always yields an outcome, never an error.
pub async fn invoke(mut config: AlertsConfig, invocation: &Invocation) -> PipelineOutcome {
    invocation.apply_to(&mut config);

    let pipeline = config
        .validate()
        .map_err(|e| AlertsError::Configuration(format!("Configuration validation failed: {e}")))
        .and_then(|_| {
            let messaging: Arc<dyn MessagingClient> = Arc::new(FcmClient::new(&config.messaging)?);
            ReportPipeline::from_config(&config, messaging)
        });

    match pipeline {
        Ok(pipeline) => pipeline.run().await.outcome,
        Err(e) => {
            log_error_with_context!(&e, "Failed to prepare notification run");
            PipelineOutcome::from_error(&e)
        }
    }
}
