use crate::gateways::{CheckoutGateway, CheckoutRequest, CheckoutSession, InitializeOutcome};
use anyhow::Result;

pub struct MockGateway {
    pub behavior: String,
}

#[async_trait::async_trait]
impl CheckoutGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn initialize(&self, request: CheckoutRequest) -> Result<InitializeOutcome> {
        let outcome = match self.behavior.as_str() {
            "ALWAYS_REJECT" => InitializeOutcome::Rejected {
                message: "mock decline".to_string(),
            },
            _ => InitializeOutcome::Accepted(CheckoutSession {
                authorization_url: format!("https://checkout.mock/{}", request.reference),
                access_code: format!("mock_access_{}", uuid::Uuid::new_v4()),
            }),
        };

        Ok(outcome)
    }
}
