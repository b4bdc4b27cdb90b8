//! Firebase Cloud Messaging (HTTP v1) client
//!
//! The session (service account, project id, send URL, bearer token) is built
//! on first use and reused by every later send from the same client.

use super::{BatchResponse, MessagingClient};
use crate::config::{MessagingConfig, SecretString};
use crate::domain::{AlertsError, DeliveryError, Message, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;

/// Fields read from a Google service account document
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub client_email: Option<String>,
}

impl ServiceAccount {
    /// Parse a service account from a file path or an inline JSON document
    pub async fn resolve(credentials: &str) -> std::result::Result<Self, DeliveryError> {
        let trimmed = credentials.trim();
        let document = if trimmed.starts_with('{') {
            trimmed.to_string()
        } else {
            tokio::fs::read_to_string(trimmed).await.map_err(|e| {
                DeliveryError::ClientInitialization(format!(
                    "Failed to read credentials file {trimmed}: {e}"
                ))
            })?
        };

        serde_json::from_str(&document).map_err(|e| {
            DeliveryError::ClientInitialization(format!("Invalid service account JSON: {e}"))
        })
    }
}

/// Initialized messaging session
#[derive(Debug)]
struct FcmSession {
    project_id: String,
    send_url: String,
    access_token: SecretString,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a Message,
}

#[derive(Deserialize)]
struct SendResponse {
    name: String,
}

/// FCM HTTP v1 messaging client
///
/// # Example
///
/// ```no_run
/// use covid_alerts::adapters::messaging::{FcmClient, MessagingClient};
/// use covid_alerts::config::{secret_string, MessagingConfig};
///
/// # async fn example(message: covid_alerts::domain::Message) -> covid_alerts::domain::Result<()> {
/// let config = MessagingConfig {
///     credentials: Some(secret_string("/secrets/service-account.json".to_string())),
///     access_token: Some(secret_string("ya29.token".to_string())),
///     ..Default::default()
/// };
/// let client = FcmClient::new(&config)?;
/// let id = client.send(&message).await?;
/// # Ok(())
/// # }
/// ```
pub struct FcmClient {
    credentials: Option<SecretString>,
    access_token: Option<SecretString>,
    project_id: Option<String>,
    endpoint: String,
    client: Client,
    session: OnceCell<FcmSession>,
}

impl FcmClient {
    /// Create a client from the `[messaging]` configuration
    ///
    /// Nothing is read or contacted until the first send.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &MessagingConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AlertsError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            credentials: config.credentials.clone(),
            access_token: config.access_token.clone(),
            project_id: config.project_id.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
            session: OnceCell::new(),
        })
    }

    /// Whether the session has been built
    pub fn is_initialized(&self) -> bool {
        self.session.initialized()
    }

    /// Project the session is bound to, once initialized
    pub fn project_id(&self) -> Option<&str> {
        self.session.get().map(|s| s.project_id.as_str())
    }

    async fn session(&self) -> std::result::Result<&FcmSession, DeliveryError> {
        self.session.get_or_try_init(|| self.init_session()).await
    }

    async fn init_session(&self) -> std::result::Result<FcmSession, DeliveryError> {
        tracing::debug!("Initializing messaging client");

        let credentials = self
            .credentials
            .as_ref()
            .filter(|c| !c.expose_secret().is_blank())
            .ok_or_else(|| {
                DeliveryError::ClientInitialization(
                    "No credentials supplied (GOOGLE_APPLICATION_CREDENTIALS)".to_string(),
                )
            })?;

        let account = ServiceAccount::resolve(credentials.expose_secret().as_ref()).await?;

        let project_id = self
            .project_id
            .clone()
            .or(account.project_id)
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                DeliveryError::ClientInitialization(
                    "No project_id in credentials or messaging.project_id".to_string(),
                )
            })?;

        let access_token = self
            .access_token
            .clone()
            .filter(|t| !t.expose_secret().is_blank())
            .ok_or_else(|| {
                DeliveryError::ClientInitialization(
                    "No access token supplied (FCM_ACCESS_TOKEN)".to_string(),
                )
            })?;

        let send_url = format!("{}/v1/projects/{}/messages:send", self.endpoint, project_id);

        tracing::info!(
            project_id = %project_id,
            client_email = account.client_email.as_deref().unwrap_or("unknown"),
            "Messaging client initialized"
        );

        Ok(FcmSession {
            project_id,
            send_url,
            access_token,
        })
    }
}

#[async_trait]
impl MessagingClient for FcmClient {
    async fn send_all(
        &self,
        messages: &[Message],
    ) -> std::result::Result<BatchResponse, DeliveryError> {
        let mut response = BatchResponse::default();

        for message in messages {
            match self.send(message).await {
                Ok(_) => response.success_count += 1,
                Err(e) if e.is_session_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(topic = %message.topic, error = %e, "Message rejected");
                    response.failure_count += 1;
                }
            }
        }

        Ok(response)
    }

    async fn send(&self, message: &Message) -> std::result::Result<String, DeliveryError> {
        let session = self.session().await?;

        let resp = self
            .client
            .post(&session.send_url)
            .bearer_auth(session.access_token.expose_secret().as_ref())
            .json(&SendRequest { message })
            .send()
            .await
            .map_err(|e| DeliveryError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        let sent = resp
            .json::<SendResponse>()
            .await
            .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))?;

        tracing::debug!(topic = %message.topic, message_id = %sent.name, "Message sent");
        Ok(sent.name)
    }
}
