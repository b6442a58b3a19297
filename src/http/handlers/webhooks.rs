use crate::service::initiator::err;
use crate::webhook::event::WebhookEvent;
use crate::webhook::signature::{verify_signature, SIGNATURE_HEADER};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

/// Signature failures are the only rejection path. Once the body is
/// authenticated and parsed, the delivery is acknowledged no matter what
/// happens internally, so the gateway never retry-storms on our faults.
pub async fn paystack_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(&body, signature, &state.webhook_secret) {
        tracing::warn!("webhook signature verification failed");
        return (
            axum::http::StatusCode::UNAUTHORIZED,
            Json(err("SIGNATURE_ERROR", "invalid webhook signature")),
        )
            .into_response();
    }

    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(err("VALIDATION_ERROR", &format!("malformed webhook body: {e}"))),
            )
                .into_response();
        }
    };

    if let Err(e) = state.reconciler.apply(&event).await {
        tracing::error!(error = %e, event_type = %event.event, "reconciliation failed, acknowledging anyway");
    }

    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({"received": true})),
    )
        .into_response()
}
