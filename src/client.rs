use std::time::Duration;

use serde::Serialize;

use crate::check::check_response;
use crate::config::Config;
use crate::error::Error;
use crate::models::{EventPost, IngestedEvent, SubscriptionCreated, SubscriptionPost};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SUBSCRIPTIONS_PATH: &str = "/api/v1/subscriptions/";
const EVENTS_PATH: &str = "/api/v1/event/";

const SUBSCRIPTION_MARKERS: &[&str] = &["created_at", "subscription_id"];
const EVENT_MARKERS: &[&str] = &["event_id", "received_at"];

/// Client for the steps of the load-test scenario. Every step collapses its
/// failures into `None` and logs the reason.
pub struct LoadTestClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl LoadTestClient {
    pub fn new(base_url: &str, auth_token: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.base_url, &config.auth_token, config.timeout)
    }

    /// Create a subscription delivering `event_types` to `target_url`.
    /// Returns the server-assigned subscription id on a 201 response.
    pub async fn create_subscription(
        &self,
        application_id: &str,
        event_types: &[String],
        target_url: &str,
    ) -> Option<String> {
        match self
            .try_create_subscription(application_id, event_types, target_url)
            .await
        {
            Ok(subscription_id) => {
                tracing::info!("Created subscription {subscription_id}");
                Some(subscription_id)
            }
            Err(e) => {
                tracing::warn!("Subscription creation failed: {e}");
                None
            }
        }
    }

    async fn try_create_subscription(
        &self,
        application_id: &str,
        event_types: &[String],
        target_url: &str,
    ) -> Result<String, Error> {
        let body = SubscriptionPost::new(application_id, event_types, target_url);

        let (status, text) = self.post_json(SUBSCRIPTIONS_PATH, &body).await?;
        check_response(status, &text, 201, SUBSCRIPTION_MARKERS)?;

        let created: SubscriptionCreated = serde_json::from_str(&text)?;
        Ok(created.subscription_id)
    }

    /// Ingest one event of `event_type` carrying `payload`.
    /// Returns the event id echoed by the server on a 201 response.
    pub async fn ingest_event(
        &self,
        application_id: &str,
        application_secret: &str,
        event_type: &str,
        payload: &serde_json::Value,
    ) -> Option<String> {
        match self
            .try_ingest_event(application_id, application_secret, event_type, payload)
            .await
        {
            Ok(event_id) => {
                tracing::info!("Ingested event {event_id}");
                Some(event_id)
            }
            Err(e) => {
                tracing::warn!("Event ingestion failed: {e}");
                None
            }
        }
    }

    async fn try_ingest_event(
        &self,
        application_id: &str,
        application_secret: &str,
        event_type: &str,
        payload: &serde_json::Value,
    ) -> Result<String, Error> {
        let body = EventPost::new(application_id, application_secret, event_type, payload);

        let (status, text) = self.post_json(EVENTS_PATH, &body).await?;
        check_response(status, &text, 201, EVENT_MARKERS)?;

        let ingested: IngestedEvent = serde_json::from_str(&text)?;
        Ok(ingested.event_id)
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(u16, String), Error> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!("POST {url}");

        let resp = self
            .client
            .post(&url)
            .header("Authorization", &self.auth_token)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        tracing::debug!("POST {url} returned {status}");

        Ok((status, text))
    }
}

/// One-shot subscription creation with a default client.
pub async fn create_subscription(
    base_url: &str,
    auth_token: &str,
    application_id: &str,
    event_types: &[String],
    target_url: &str,
) -> Option<String> {
    let client = match LoadTestClient::new(base_url, auth_token, DEFAULT_TIMEOUT) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to build HTTP client: {e}");
            return None;
        }
    };

    client
        .create_subscription(application_id, event_types, target_url)
        .await
}
