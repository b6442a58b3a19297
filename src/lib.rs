use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod domain {
    pub mod appointment;
    pub mod payment;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
        pub mod webhooks;
    }
}
pub mod repo {
    pub mod appointments_repo;
    pub mod payments_repo;
    pub mod store;
}
pub mod service {
    pub mod initiator;
    pub mod reconciler;
}
pub mod webhook {
    pub mod event;
    pub mod signature;
}

#[derive(Clone)]
pub struct AppState {
    pub initiator: service::initiator::PaymentInitiator,
    pub reconciler: service::reconciler::ReconciliationEngine,
    pub webhook_secret: String,
    pub pool: sqlx::PgPool,
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route("/payments/initiate", post(http::handlers::payments::initiate_payment))
        .route("/payments/:reference", get(http::handlers::payments::get_payment))
        .route("/webhooks/paystack", post(http::handlers::webhooks::paystack_webhook))
        .route("/ops/readiness", get(http::handlers::ops::readiness))
        .route("/ops/liveness", get(http::handlers::ops::liveness))
        .with_state(state)
}
