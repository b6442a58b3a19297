use crate::domain::payment::{
    new_reference, ErrorEnvelope, ErrorPayload, InitiatePaymentRequest, InitiatePaymentResponse,
    PaymentProvider, PaymentStatus,
};
use crate::gateways::{CheckoutGateway, CheckoutRequest, InitializeOutcome};
use crate::repo::store::{NewPayment, PaymentStore};
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentInitiator {
    pub payments: Arc<dyn PaymentStore>,
    pub gateway: Arc<dyn CheckoutGateway>,
}

impl PaymentInitiator {
    pub async fn initiate(
        &self,
        req: InitiatePaymentRequest,
    ) -> Result<InitiatePaymentResponse, (StatusCode, ErrorEnvelope)> {
        validate_request(&req)?;

        let reference = new_reference();

        // The row must exist before the gateway call so a webhook arriving
        // immediately after initiation always finds a matching payment.
        let payment = self
            .payments
            .insert_initiated(&NewPayment {
                appointment_id: req.appointment_id.clone(),
                amount_minor: req.amount_minor,
                provider: PaymentProvider::Paystack,
                reference: reference.clone(),
            })
            .await
            .map_err(database)?;

        let outcome = self
            .gateway
            .initialize(CheckoutRequest {
                amount_minor: req.amount_minor,
                email: req.email.clone(),
                reference: reference.clone(),
                appointment_id: req.appointment_id.clone(),
            })
            .await
            .unwrap_or_else(|e| InitializeOutcome::Rejected { message: e.to_string() });

        match outcome {
            InitializeOutcome::Accepted(session) => Ok(InitiatePaymentResponse {
                payment_id: payment.id,
                reference,
                authorization_url: session.authorization_url,
                access_code: session.access_code,
            }),
            InitializeOutcome::Rejected { message } => {
                // Best-effort: the payment is already recorded, mark it
                // failed so it does not linger as initiated forever.
                if let Err(e) = self
                    .payments
                    .mark_terminal(&reference, PaymentStatus::Failed)
                    .await
                {
                    tracing::warn!(%reference, error = %e, "failed to mark rejected payment as failed");
                }
                Err((
                    StatusCode::PAYMENT_REQUIRED,
                    err("PAYMENT_ERROR", &message),
                ))
            }
        }
    }
}

fn validate_request(req: &InitiatePaymentRequest) -> Result<(), (StatusCode, ErrorEnvelope)> {
    if req.appointment_id.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("VALIDATION_ERROR", "appointment_id is required"),
        ));
    }
    if req.amount_minor <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            err("VALIDATION_ERROR", "amount_minor must be > 0"),
        ));
    }
    if req.email.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("VALIDATION_ERROR", "email is required"),
        ));
    }
    Ok(())
}

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}

fn database(e: anyhow::Error) -> (StatusCode, ErrorEnvelope) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        err("DATABASE_ERROR", &e.to_string()),
    )
}
