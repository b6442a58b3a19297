use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentProvider {
    Paystack,
}

impl PaymentProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentProvider::Paystack => "PAYSTACK",
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "PAYSTACK" => Ok(PaymentProvider::Paystack),
            other => anyhow::bail!("unknown payment provider: {other}"),
        }
    }
}

/// A payment is created `Initiated` and transitions exactly once, to `Paid`
/// or `Failed`. Terminal states are never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Initiated,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, PaymentStatus::Initiated)
    }

    /// Maps a gateway event type to the terminal status it targets. Event
    /// types we do not handle map to `None` and are ignored upstream.
    pub fn target_for(event_type: &str) -> Option<PaymentStatus> {
        match event_type {
            "charge.success" => Some(PaymentStatus::Paid),
            "charge.failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Initiated => "INITIATED",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "INITIATED" => Ok(PaymentStatus::Initiated),
            "PAID" => Ok(PaymentStatus::Paid),
            "FAILED" => Ok(PaymentStatus::Failed),
            other => anyhow::bail!("unknown payment status: {other}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: Uuid,
    pub appointment_id: String,
    pub amount_minor: i64,
    pub provider: PaymentProvider,
    pub reference: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InitiatePaymentRequest {
    pub appointment_id: String,
    pub amount_minor: i64,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiatePaymentResponse {
    pub payment_id: Uuid,
    pub reference: String,
    pub authorization_url: String,
    pub access_code: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

/// Correlation token linking a local payment to the gateway transaction.
/// Must be unguessable; a v4 uuid carries enough entropy.
pub fn new_reference() -> String {
    format!("ps_ref_{}", Uuid::new_v4())
}
