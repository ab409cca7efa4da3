use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pub/Sub push envelope as delivered to the trigger endpoint. Everything
/// inside is optional on the wire; a missing message is a no-op, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushEnvelope {
    #[serde(default)]
    pub message: Option<PubSubMessage>,
    #[serde(default)]
    pub subscription: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubMessage {
    /// Base64-encoded inner payload.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default, rename = "messageId")]
    pub message_id: Option<String>,
    #[serde(default, rename = "publishTime")]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub attributes: Option<HashMap<String, String>>,
}

/// Decoded inner payload. Both fields are required; serde rejects a payload
/// missing either one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundNotification {
    pub username: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
}
