use crate::domain::payment::PaymentStatus;
use crate::repo::store::{AppointmentStore, PaymentStore, TransitionOutcome};
use crate::webhook::event::WebhookEvent;
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReconciliationEngine {
    pub payments: Arc<dyn PaymentStore>,
    pub appointments: Arc<dyn AppointmentStore>,
}

impl ReconciliationEngine {
    /// Applies one webhook delivery. The payment write is guarded on the
    /// current status being non-terminal, so duplicate and out-of-order
    /// deliveries for the same reference are no-ops. The appointment
    /// confirmation is best-effort and never undoes the payment write.
    pub async fn apply(&self, event: &WebhookEvent) -> Result<()> {
        let Some(target) = PaymentStatus::target_for(&event.event) else {
            tracing::debug!(event_type = %event.event, "ignoring unhandled webhook event");
            return Ok(());
        };

        let reference = &event.data.reference;
        match self.payments.mark_terminal(reference, target).await? {
            TransitionOutcome::Applied => {
                tracing::info!(%reference, status = target.as_str(), "payment reconciled");
            }
            TransitionOutcome::AlreadyTerminal => {
                tracing::debug!(%reference, "duplicate delivery for terminal payment, skipping");
            }
            TransitionOutcome::NotFound => {
                tracing::warn!(%reference, "webhook references unknown payment");
            }
        }

        if target == PaymentStatus::Paid {
            let appointment_id = event
                .data
                .metadata
                .as_ref()
                .and_then(|m| m.appointment_id.as_deref());
            if let Some(appointment_id) = appointment_id {
                match self.appointments.confirm(appointment_id).await {
                    Ok(true) => {
                        tracing::info!(%appointment_id, "appointment confirmed");
                    }
                    Ok(false) => {
                        tracing::warn!(%appointment_id, "appointment not found for paid payment");
                    }
                    Err(e) => {
                        tracing::warn!(%appointment_id, error = %e, "appointment confirmation failed");
                    }
                }
            }
        }

        Ok(())
    }
}
