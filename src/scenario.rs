use serde_json::json;

use crate::client::LoadTestClient;
use crate::config::Config;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub subscription_id: String,
    pub event_id: Option<String>,
}

/// Run one pass of the scenario: create a subscription, then ingest a single
/// event of the first configured type when an application secret is set.
pub async fn run(client: &LoadTestClient, config: &Config) -> Result<ScenarioReport, Error> {
    let subscription_id = client
        .create_subscription(
            &config.application_id,
            &config.event_types,
            &config.target_url,
        )
        .await
        .ok_or(Error::StepFailed("create_subscription"))?;

    let event_id = match (&config.application_secret, config.event_types.first()) {
        (Some(secret), Some(event_type)) => {
            let payload = json!({ "subscription_id": &subscription_id });
            let event_id = client
                .ingest_event(&config.application_id, secret, event_type, &payload)
                .await
                .ok_or(Error::StepFailed("ingest_event"))?;
            Some(event_id)
        }
        _ => {
            tracing::debug!("No application secret configured, skipping event ingestion");
            None
        }
    };

    Ok(ScenarioReport {
        subscription_id,
        event_id,
    })
}
