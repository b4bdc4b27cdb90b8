//! Result type alias for covid-alerts

use super::errors::AlertsError;

/// Result type alias for covid-alerts operations
///
/// # Examples
///
/// ```
/// use covid_alerts::domain::result::Result;
/// use covid_alerts::domain::errors::AlertsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AlertsError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AlertsError>;
