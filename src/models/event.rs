use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subscription::{LABEL_KEY, LABEL_VALUE};

pub const PAYLOAD_CONTENT_TYPE: &str = "application/json";

/// Body of `POST /api/v1/event/`. The payload travels base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventPost {
    pub application_id: String,
    pub application_secret: String,
    pub event_id: Uuid,
    pub event_type: String,
    pub payload: String,
    pub payload_content_type: String,
    pub metadata: HashMap<String, String>,
    pub occurred_at: DateTime<Utc>,
    pub labels: HashMap<String, String>,
}

impl EventPost {
    pub fn new(
        application_id: &str,
        application_secret: &str,
        event_type: &str,
        payload: &serde_json::Value,
    ) -> Self {
        let mut labels = HashMap::new();
        labels.insert(LABEL_KEY.to_string(), LABEL_VALUE.to_string());

        Self {
            application_id: application_id.to_string(),
            application_secret: application_secret.to_string(),
            event_id: Uuid::new_v4(),
            event_type: event_type.to_string(),
            payload: STANDARD.encode(payload.to_string()),
            payload_content_type: PAYLOAD_CONTENT_TYPE.to_string(),
            metadata: super::load_test_metadata(),
            occurred_at: Utc::now(),
            labels,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestedEvent {
    pub event_id: String,
    #[serde(default)]
    pub application_id: serde_json::Value,
    #[serde(default)]
    pub received_at: serde_json::Value,
}
