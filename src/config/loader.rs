//! Configuration loader with TOML parsing and environment variable overrides

use super::invocation::parse_date_offset;
use super::schema::AlertsConfig;
use super::secret::secret_string;
use crate::domain::errors::AlertsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COVID_ALERTS";

/// Loads and validates configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AlertsConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, TOML parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use covid_alerts::config::loader::load_config;
///
/// let config = load_config("covid-alerts.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AlertsConfig> {
    let config = load_config_unvalidated(path)?;

    config.validate().map_err(|e| {
        AlertsError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration without validating it
///
/// Used when more settings (CLI flags, invocation parameters) are layered on
/// before validation.
pub fn load_config_unvalidated(path: impl AsRef<Path>) -> Result<AlertsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AlertsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AlertsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration from `path` if it exists, otherwise starts from
/// defaults; environment overrides apply either way. Not validated.
pub fn load_config_or_defaults(path: impl AsRef<Path>) -> Result<AlertsConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config_unvalidated(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = AlertsConfig::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Parse configuration text: substitution, TOML, environment overrides
pub fn parse_config(contents: &str) -> Result<AlertsConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: AlertsConfig = toml::from_str(&contents)
        .map_err(|e| AlertsError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AlertsError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AlertsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        AlertsError::Configuration(format!(
            "Invalid value '{value}' for {ENV_PREFIX}_{key}"
        ))
    })
}

/// Applies environment variable overrides
///
/// The bare invocation variables (`GOOGLE_APPLICATION_CREDENTIALS`,
/// `COUNTRY`, `DATE_OFFSET`, `FCM_ACCESS_TOKEN`) are applied first, then
/// `COVID_ALERTS_<SECTION>_<KEY>` variables, which win on conflict.
fn apply_env_overrides(config: &mut AlertsConfig) -> Result<()> {
    if let Ok(val) = std::env::var("GOOGLE_APPLICATION_CREDENTIALS") {
        config.messaging.credentials = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("COUNTRY") {
        config.report.country = val;
    }
    if let Ok(val) = std::env::var("DATE_OFFSET") {
        if let Some(offset) = parse_date_offset(&val).map_err(AlertsError::Configuration)? {
            config.report.date_offset = offset;
        }
    }
    if let Ok(val) = std::env::var("FCM_ACCESS_TOKEN") {
        config.messaging.access_token = Some(secret_string(val));
    }

    // Application overrides
    if let Some(val) = env("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env("APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_env("APPLICATION_DRY_RUN", &val)?;
    }

    // API overrides
    if let Some(val) = env("API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Some(val) = env("API_TIMEOUT_SECONDS") {
        config.api.timeout_seconds = parse_env("API_TIMEOUT_SECONDS", &val)?;
    }

    // Report overrides
    if let Some(val) = env("REPORT_COUNTRY") {
        config.report.country = val;
    }
    if let Some(val) = env("REPORT_DATE_OFFSET") {
        config.report.date_offset = parse_env("REPORT_DATE_OFFSET", &val)?;
    }
    if let Some(val) = env("REPORT_INCLUDE_CITIES") {
        config.report.include_cities = parse_env("REPORT_INCLUDE_CITIES", &val)?;
    }

    // Messaging overrides
    if let Some(val) = env("MESSAGING_CREDENTIALS") {
        config.messaging.credentials = Some(secret_string(val));
    }
    if let Some(val) = env("MESSAGING_ACCESS_TOKEN") {
        config.messaging.access_token = Some(secret_string(val));
    }
    if let Some(val) = env("MESSAGING_PROJECT_ID") {
        config.messaging.project_id = Some(val);
    }
    if let Some(val) = env("MESSAGING_ENDPOINT") {
        config.messaging.endpoint = val;
    }
    if let Some(val) = env("MESSAGING_SEND_IN_BATCHES") {
        config.messaging.send_in_batches = parse_env("MESSAGING_SEND_IN_BATCHES", &val)?;
    }
    if let Some(val) = env("MESSAGING_MAX_BATCH_SIZE") {
        config.messaging.max_batch_size = parse_env("MESSAGING_MAX_BATCH_SIZE", &val)?;
    }

    // Logging overrides
    if let Some(val) = env("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("COVID_ALERTS_LOADER_TEST_VAR", "test_value");
        let input = "access_token = \"${COVID_ALERTS_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result.trim_end(), "access_token = \"test_value\"");
        std::env::remove_var("COVID_ALERTS_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("COVID_ALERTS_LOADER_MISSING_VAR");
        let input = "access_token = \"${COVID_ALERTS_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# token = \"${COVID_ALERTS_LOADER_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${COVID_ALERTS_LOADER_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_defaults_missing_file() {
        let config = load_config_or_defaults("nonexistent-covid-alerts.toml").unwrap();
        assert_eq!(config.messaging.max_batch_size, 500);
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"
dry_run = true

[api]
base_url = "https://covid-api.example.com/api"

[report]
country = "Brazil"
date_offset = 2
include_cities = false

[messaging]
send_in_batches = false
max_batch_size = 250
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.api.base_url, "https://covid-api.example.com/api");
        assert_eq!(config.report.date_offset, 2);
        assert!(!config.report.include_cities);
        assert!(!config.messaging.send_in_batches);
        assert_eq!(config.messaging.max_batch_size, 250);
    }
}
