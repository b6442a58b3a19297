use serde::{Deserialize, Serialize};

/// Inbound gateway notification. Only `event` and `data.reference` are
/// guaranteed; everything else in the payload is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub event: String,
    pub data: WebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookData {
    pub reference: String,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub metadata: Option<WebhookMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookMetadata {
    #[serde(default)]
    pub appointment_id: Option<String>,
}
