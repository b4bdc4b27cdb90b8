//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX`.

use covid_alerts::config::{load_config, load_config_or_defaults, Invocation};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for key in [
        "COVID_ALERTS_APPLICATION_LOG_LEVEL",
        "COVID_ALERTS_APPLICATION_DRY_RUN",
        "COVID_ALERTS_REPORT_COUNTRY",
        "COVID_ALERTS_REPORT_DATE_OFFSET",
        "COVID_ALERTS_MESSAGING_MAX_BATCH_SIZE",
        "GOOGLE_APPLICATION_CREDENTIALS",
        "COUNTRY",
        "DATE_OFFSET",
        "FCM_ACCESS_TOKEN",
        "TEST_FCM_ACCESS_TOKEN",
    ] {
        std::env::remove_var(key);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const COMPLETE_CONFIG: &str = r#"
[application]
log_level = "debug"
dry_run = false

[api]
base_url = "https://covid-api.example.com/api"
timeout_seconds = 10
user_agent = "covid-alerts-test"

[report]
country = "Brazil"
date_offset = 2
include_cities = false

[messaging]
credentials = "/secrets/service-account.json"
access_token = "static-token"
project_id = "demo-project"
endpoint = "https://fcm.example.com"
send_in_batches = false
max_batch_size = 100
timeout_seconds = 15

[logging]
local_enabled = false
local_path = "/tmp/covid-alerts"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.api.base_url, "https://covid-api.example.com/api");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.user_agent, "covid-alerts-test");
    assert_eq!(config.report.country, "Brazil");
    assert_eq!(config.report.date_offset, 2);
    assert!(!config.report.include_cities);
    assert_eq!(
        config.messaging.credentials.as_ref().unwrap().expose_secret(),
        "/secrets/service-account.json"
    );
    assert_eq!(config.messaging.project_id.as_deref(), Some("demo-project"));
    assert!(!config.messaging.send_in_batches);
    assert_eq!(config.messaging.max_batch_size, 100);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_FCM_ACCESS_TOKEN", "substituted-token");

    let file = write_config(
        r#"
[report]
country = "Brazil"

[messaging]
credentials = "/secrets/sa.json"
access_token = "${TEST_FCM_ACCESS_TOKEN}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.messaging.access_token.as_ref().unwrap().expose_secret(),
        "substituted-token"
    );
    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[report]
country = "Brazil"

[messaging]
credentials = "/secrets/sa.json"
access_token = "${TEST_FCM_ACCESS_TOKEN}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_FCM_ACCESS_TOKEN"));
}

#[test]
fn test_prefixed_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("COVID_ALERTS_REPORT_COUNTRY", "Canada");
    std::env::set_var("COVID_ALERTS_REPORT_DATE_OFFSET", "0");
    std::env::set_var("COVID_ALERTS_MESSAGING_MAX_BATCH_SIZE", "250");
    std::env::set_var("COVID_ALERTS_APPLICATION_LOG_LEVEL", "warn");

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.report.country, "Canada");
    assert_eq!(config.report.date_offset, 0);
    assert_eq!(config.messaging.max_batch_size, 250);
    assert_eq!(config.application.log_level, "warn");
    cleanup_env_vars();
}

#[test]
fn test_invocation_env_variables() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GOOGLE_APPLICATION_CREDENTIALS", "/env/sa.json");
    std::env::set_var("COUNTRY", "Chile");
    std::env::set_var("DATE_OFFSET", "3");
    std::env::set_var("FCM_ACCESS_TOKEN", "env-token");

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.report.country, "Chile");
    assert_eq!(config.report.date_offset, 3);
    assert_eq!(
        config.messaging.credentials.as_ref().unwrap().expose_secret(),
        "/env/sa.json"
    );
    assert_eq!(
        config.messaging.access_token.as_ref().unwrap().expose_secret(),
        "env-token"
    );
    cleanup_env_vars();
}

#[test]
fn test_prefixed_override_wins_over_bare_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("COUNTRY", "Chile");
    std::env::set_var("COVID_ALERTS_REPORT_COUNTRY", "Peru");

    let file = write_config(COMPLETE_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.report.country, "Peru");
    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DATE_OFFSET", "yesterday");

    let file = write_config(COMPLETE_CONFIG);
    assert!(load_config(file.path()).is_err());
    cleanup_env_vars();
}

#[test]
fn test_validation_failures() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let no_country = write_config(
        r#"
[messaging]
credentials = "/secrets/sa.json"
"#,
    );
    assert!(load_config(no_country.path()).is_err());

    let too_large = write_config(
        r#"
[report]
country = "Brazil"

[messaging]
credentials = "/secrets/sa.json"
max_batch_size = 1000
"#,
    );
    assert!(load_config(too_large.path()).is_err());
}

#[test]
fn test_credentials_not_required_at_load() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[report]
country = "Brazil"
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert!(config.messaging.credentials.is_none());
    assert!(!config.application.dry_run);
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[report\ncountry = ");
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invocation_merged_over_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let mut config = load_config_or_defaults("no-such-covid-alerts.toml").unwrap();
    assert!(config.validate().is_err());

    let invocation = Invocation::from_json(
        r#"{"GOOGLE_APPLICATION_CREDENTIALS":"{\"project_id\":\"demo\"}","COUNTRY":"Brazil","DATE_OFFSET":"1"}"#,
    )
    .unwrap();
    invocation.apply_to(&mut config);

    assert!(config.validate().is_ok());
    assert_eq!(config.report.country, "Brazil");
}
