use crate::domain::payment::InitiatePaymentRequest;
use crate::service::initiator::err;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(req): Json<InitiatePaymentRequest>,
) -> impl IntoResponse {
    match state.initiator.initiate(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.initiator.payments.find_by_reference(&reference).await {
        Ok(Some(payment)) => (axum::http::StatusCode::OK, Json(payment)).into_response(),
        Ok(None) => (
            axum::http::StatusCode::NOT_FOUND,
            Json(err("NOT_FOUND", "no payment with that reference")),
        )
            .into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(err("DATABASE_ERROR", &e.to_string())),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
