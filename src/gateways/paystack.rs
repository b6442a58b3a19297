use crate::gateways::{CheckoutGateway, CheckoutRequest, CheckoutSession, InitializeOutcome};
use anyhow::Result;
use serde_json::json;

pub struct PaystackGateway {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl CheckoutGateway for PaystackGateway {
    fn name(&self) -> &'static str {
        "paystack"
    }

    async fn initialize(&self, request: CheckoutRequest) -> Result<InitializeOutcome> {
        let url = format!("{}/transaction/initialize", self.base_url);
        let body = json!({
            "amount": request.amount_minor,
            "email": request.email,
            "reference": request.reference,
            "metadata": { "appointment_id": request.appointment_id }
        });

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        let outcome = match resp {
            Ok(r) if r.status().is_success() => {
                let v: serde_json::Value = r.json().await.unwrap_or_default();
                if v.get("status").and_then(|s| s.as_bool()) == Some(true) {
                    let authorization_url = v
                        .pointer("/data/authorization_url")
                        .and_then(|u| u.as_str())
                        .map(ToString::to_string);
                    let access_code = v
                        .pointer("/data/access_code")
                        .and_then(|c| c.as_str())
                        .map(ToString::to_string);
                    match (authorization_url, access_code) {
                        (Some(authorization_url), Some(access_code)) => {
                            InitializeOutcome::Accepted(CheckoutSession {
                                authorization_url,
                                access_code,
                            })
                        }
                        _ => InitializeOutcome::Rejected {
                            message: "gateway response missing checkout session".to_string(),
                        },
                    }
                } else {
                    InitializeOutcome::Rejected {
                        message: v
                            .get("message")
                            .and_then(|m| m.as_str())
                            .unwrap_or("gateway declined initialization")
                            .to_string(),
                    }
                }
            }
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                InitializeOutcome::Rejected {
                    message: format!("HTTP_{}: {}", status.as_u16(), truncate(&body, 200)),
                }
            }
            Err(e) if e.is_timeout() => InitializeOutcome::Rejected {
                message: "gateway timeout".to_string(),
            },
            Err(e) => InitializeOutcome::Rejected {
                message: e.to_string(),
            },
        };

        Ok(outcome)
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
