use crate::domain::payment::{Payment, PaymentProvider, PaymentStatus};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub appointment_id: String,
    pub amount_minor: i64,
    pub provider: PaymentProvider,
    pub reference: String,
}

/// Result of the guarded terminal write. `AlreadyTerminal` covers duplicate
/// and out-of-order deliveries; the store never overwrites a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    AlreadyTerminal,
    NotFound,
}

#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert_initiated(&self, new: &NewPayment) -> Result<Payment>;

    /// Compare-and-set: transitions the payment matching `reference` to
    /// `target` only if its current status is `Initiated`.
    async fn mark_terminal(&self, reference: &str, target: PaymentStatus) -> Result<TransitionOutcome>;

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Payment>>;
}

#[async_trait::async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Sets the appointment to `Confirmed`. Returns false when no row matched.
    async fn confirm(&self, appointment_id: &str) -> Result<bool>;
}
