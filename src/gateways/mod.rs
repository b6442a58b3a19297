use anyhow::Result;

pub mod mock;
pub mod paystack;

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub amount_minor: i64,
    pub email: String,
    pub reference: String,
    pub appointment_id: String,
}

#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub authorization_url: String,
    pub access_code: String,
}

/// Gateway rejections, timeouts, and network failures all normalize to
/// `Rejected`; `initialize` only errors on local serialization problems.
#[derive(Debug, Clone)]
pub enum InitializeOutcome {
    Accepted(CheckoutSession),
    Rejected { message: String },
}

#[async_trait::async_trait]
pub trait CheckoutGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn initialize(&self, request: CheckoutRequest) -> Result<InitializeOutcome>;
}
