use crate::domain::payment::{Payment, PaymentProvider, PaymentStatus};
use crate::repo::store::{NewPayment, PaymentStore, TransitionOutcome};
use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgPaymentStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl PaymentStore for PgPaymentStore {
    async fn insert_initiated(&self, new: &NewPayment) -> Result<Payment> {
        let id = Uuid::new_v4();
        let row = sqlx::query(
            r#"
            INSERT INTO payments (id, appointment_id, amount_minor, provider, reference, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, appointment_id, amount_minor, provider, reference, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new.appointment_id)
        .bind(new.amount_minor)
        .bind(new.provider.as_str())
        .bind(&new.reference)
        .bind(PaymentStatus::Initiated.as_str())
        .fetch_one(&self.pool)
        .await?;

        payment_from_row(&row)
    }

    async fn mark_terminal(&self, reference: &str, target: PaymentStatus) -> Result<TransitionOutcome> {
        let updated = sqlx::query(
            r#"
            UPDATE payments
            SET status = $1, updated_at = now()
            WHERE reference = $2 AND status = $3
            "#,
        )
        .bind(target.as_str())
        .bind(reference)
        .bind(PaymentStatus::Initiated.as_str())
        .execute(&self.pool)
        .await?;

        if updated.rows_affected() > 0 {
            return Ok(TransitionOutcome::Applied);
        }

        let exists = sqlx::query("SELECT 1 FROM payments WHERE reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await?;

        Ok(if exists.is_some() {
            TransitionOutcome::AlreadyTerminal
        } else {
            TransitionOutcome::NotFound
        })
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Payment>> {
        let row = sqlx::query(
            r#"
            SELECT id, appointment_id, amount_minor, provider, reference, status, created_at, updated_at
            FROM payments
            WHERE reference = $1
            "#,
        )
        .bind(reference)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(payment_from_row).transpose()
    }
}

fn payment_from_row(row: &sqlx::postgres::PgRow) -> Result<Payment> {
    let provider: String = row.get("provider");
    let status: String = row.get("status");

    Ok(Payment {
        id: row.get("id"),
        appointment_id: row.get("appointment_id"),
        amount_minor: row.get("amount_minor"),
        provider: PaymentProvider::parse(&provider)?,
        reference: row.get("reference"),
        status: PaymentStatus::parse(&status)?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
