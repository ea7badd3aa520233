use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DESCRIPTION: &str = "Load test subscription";
pub const LABEL_KEY: &str = "all";
pub const LABEL_VALUE: &str = "yes";

/// Body of `POST /api/v1/subscriptions/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPost {
    pub is_enabled: bool,
    pub metadata: HashMap<String, String>,
    pub application_id: String,
    pub description: String,
    pub label_key: String,
    pub label_value: String,
    pub event_types: Vec<String>,
    pub target: Target,
}

impl SubscriptionPost {
    pub fn new(application_id: &str, event_types: &[String], target_url: &str) -> Self {
        Self {
            is_enabled: true,
            metadata: super::load_test_metadata(),
            application_id: application_id.to_string(),
            description: DESCRIPTION.to_string(),
            label_key: LABEL_KEY.to_string(),
            label_value: LABEL_VALUE.to_string(),
            event_types: event_types.to_vec(),
            target: Target::http_post(target_url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Target {
    Http {
        method: String,
        url: String,
        headers: HashMap<String, String>,
    },
}

impl Target {
    pub fn http_post(url: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        Target::Http {
            method: "POST".to_string(),
            url: url.to_string(),
            headers,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionCreated {
    pub subscription_id: String,
    #[serde(default)]
    pub created_at: serde_json::Value,
}
