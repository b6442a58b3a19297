use crate::domain::appointment::AppointmentStatus;
use crate::repo::store::AppointmentStore;
use anyhow::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgAppointmentStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn confirm(&self, appointment_id: &str) -> Result<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE appointments
            SET status = $1, updated_at = now()
            WHERE id = $2
            "#,
        )
        .bind(AppointmentStatus::Confirmed.as_str())
        .bind(appointment_id)
        .execute(&self.pool)
        .await?;

        Ok(updated.rows_affected() > 0)
    }
}
