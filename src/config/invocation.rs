//! Invocation parameters
//!
//! A scheduled invoker passes a flat JSON object such as
//!
//! ```json
//! {
//!   "GOOGLE_APPLICATION_CREDENTIALS": "/secrets/service-account.json",
//!   "COUNTRY": "Brazil",
//!   "DATE_OFFSET": "1"
//! }
//! ```
//!
//! which is merged on top of the file configuration before a run.

use super::schema::AlertsConfig;
use super::secret::{secret_string, SecretString};
use serde::{Deserialize, Deserializer};

/// Parameters accepted by the `invoke` entry point
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Invocation {
    /// Service account file path or inline JSON
    #[serde(rename = "GOOGLE_APPLICATION_CREDENTIALS", default)]
    pub credentials: Option<SecretString>,

    /// Country name, case-insensitive
    #[serde(rename = "COUNTRY", default)]
    pub country: Option<String>,

    /// Days to subtract from today; numbers and numeric strings are accepted
    #[serde(
        rename = "DATE_OFFSET",
        default,
        deserialize_with = "deserialize_date_offset"
    )]
    pub date_offset: Option<i64>,

    /// Bearer token for the messaging service
    #[serde(rename = "FCM_ACCESS_TOKEN", default)]
    pub access_token: Option<SecretString>,
}

impl Invocation {
    pub fn new(credentials: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            credentials: Some(secret_string(credentials.into())),
            country: Some(country.into()),
            ..Default::default()
        }
    }

    pub fn with_date_offset(mut self, offset: i64) -> Self {
        self.date_offset = Some(offset);
        self
    }

    /// Parse invocation parameters from a JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or a non-numeric
    /// `DATE_OFFSET`
    pub fn from_json(json: &str) -> crate::domain::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the supplied parameters onto `config`
    pub fn apply_to(&self, config: &mut AlertsConfig) {
        if let Some(ref credentials) = self.credentials {
            config.messaging.credentials = Some(credentials.clone());
        }
        if let Some(ref country) = self.country {
            config.report.country = country.clone();
        }
        if let Some(offset) = self.date_offset {
            config.report.date_offset = offset;
        }
        if let Some(ref token) = self.access_token {
            config.messaging.access_token = Some(token.clone());
        }
    }
}

/// Parse a date offset the way the invoker supplies it
///
/// Leading/trailing whitespace is ignored; blank strings count as absent.
pub fn parse_date_offset(raw: &str) -> Result<Option<i64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("DATE_OFFSET must be an integer, got '{raw}'"))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOffset {
    Number(i64),
    Text(String),
}

fn deserialize_date_offset<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawOffset>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawOffset::Number(n)) => Ok(Some(n)),
        Some(RawOffset::Text(s)) => parse_date_offset(&s).map_err(serde::de::Error::custom),
    }
}
