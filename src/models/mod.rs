pub mod event;
pub mod subscription;

use std::collections::HashMap;

pub use event::{EventPost, IngestedEvent};
pub use subscription::{SubscriptionCreated, SubscriptionPost, Target};

/// Metadata attached to everything the load test creates.
pub fn load_test_metadata() -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert("origin".to_string(), "load-test".to_string());
    metadata
}
