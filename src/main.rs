use clinic_payments::config::AppConfig;
use clinic_payments::gateways::paystack::PaystackGateway;
use clinic_payments::repo::appointments_repo::PgAppointmentStore;
use clinic_payments::repo::payments_repo::PgPaymentStore;
use clinic_payments::service::initiator::PaymentInitiator;
use clinic_payments::service::reconciler::ReconciliationEngine;
use clinic_payments::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_millis(cfg.db_acquire_timeout_ms))
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let payments = Arc::new(PgPaymentStore { pool: pool.clone() });
    let appointments = Arc::new(PgAppointmentStore { pool: pool.clone() });
    let gateway = Arc::new(PaystackGateway {
        base_url: cfg.paystack_base_url.clone(),
        secret_key: cfg.paystack_secret_key.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    });

    let state = AppState {
        initiator: PaymentInitiator {
            payments: payments.clone(),
            gateway,
        },
        reconciler: ReconciliationEngine {
            payments,
            appointments,
        },
        webhook_secret: cfg.paystack_secret_key.clone(),
        pool,
    };

    let app = clinic_payments::app_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
