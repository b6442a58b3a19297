#![allow(dead_code)]

use chrono::Utc;
use clinic_payments::domain::appointment::AppointmentStatus;
use clinic_payments::domain::payment::{Payment, PaymentStatus};
use clinic_payments::gateways::{
    CheckoutGateway, CheckoutRequest, CheckoutSession, InitializeOutcome,
};
use clinic_payments::repo::store::{AppointmentStore, NewPayment, PaymentStore, TransitionOutcome};
use clinic_payments::webhook::event::{WebhookData, WebhookEvent, WebhookMetadata};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryPaymentStore {
    pub payments: Mutex<HashMap<String, Payment>>,
}

impl InMemoryPaymentStore {
    pub fn status_of(&self, reference: &str) -> Option<PaymentStatus> {
        self.payments.lock().unwrap().get(reference).map(|p| p.status)
    }

    pub fn count(&self) -> usize {
        self.payments.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert_initiated(&self, new: &NewPayment) -> anyhow::Result<Payment> {
        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            appointment_id: new.appointment_id.clone(),
            amount_minor: new.amount_minor,
            provider: new.provider,
            reference: new.reference.clone(),
            status: PaymentStatus::Initiated,
            created_at: now,
            updated_at: now,
        };
        self.payments
            .lock()
            .unwrap()
            .insert(new.reference.clone(), payment.clone());
        Ok(payment)
    }

    async fn mark_terminal(
        &self,
        reference: &str,
        target: PaymentStatus,
    ) -> anyhow::Result<TransitionOutcome> {
        let mut payments = self.payments.lock().unwrap();
        match payments.get_mut(reference) {
            None => Ok(TransitionOutcome::NotFound),
            Some(p) if p.status.is_terminal() => Ok(TransitionOutcome::AlreadyTerminal),
            Some(p) => {
                p.status = target;
                p.updated_at = Utc::now();
                Ok(TransitionOutcome::Applied)
            }
        }
    }

    async fn find_by_reference(&self, reference: &str) -> anyhow::Result<Option<Payment>> {
        Ok(self.payments.lock().unwrap().get(reference).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAppointmentStore {
    pub statuses: Mutex<HashMap<String, AppointmentStatus>>,
}

impl InMemoryAppointmentStore {
    pub fn seed_pending(&self, appointment_id: &str) {
        self.statuses
            .lock()
            .unwrap()
            .insert(appointment_id.to_string(), AppointmentStatus::Pending);
    }

    pub fn status_of(&self, appointment_id: &str) -> Option<AppointmentStatus> {
        self.statuses.lock().unwrap().get(appointment_id).copied()
    }
}

#[async_trait::async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn confirm(&self, appointment_id: &str) -> anyhow::Result<bool> {
        let mut statuses = self.statuses.lock().unwrap();
        match statuses.get_mut(appointment_id) {
            Some(status) => {
                *status = AppointmentStatus::Confirmed;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct FailingAppointmentStore;

#[async_trait::async_trait]
impl AppointmentStore for FailingAppointmentStore {
    async fn confirm(&self, _appointment_id: &str) -> anyhow::Result<bool> {
        anyhow::bail!("appointment store unavailable")
    }
}

/// Records, at the moment of each gateway call, what the payment store held
/// for the request's reference. Lets tests assert the row-before-gateway
/// ordering invariant.
pub struct RecordingGateway {
    pub payments: Arc<InMemoryPaymentStore>,
    pub seen: Mutex<Vec<(String, Option<PaymentStatus>)>>,
}

#[async_trait::async_trait]
impl CheckoutGateway for RecordingGateway {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn initialize(&self, request: CheckoutRequest) -> anyhow::Result<InitializeOutcome> {
        let status_at_call = self.payments.status_of(&request.reference);
        self.seen
            .lock()
            .unwrap()
            .push((request.reference.clone(), status_at_call));
        Ok(InitializeOutcome::Accepted(CheckoutSession {
            authorization_url: format!("https://checkout.test/{}", request.reference),
            access_code: "acc_test".to_string(),
        }))
    }
}

pub struct RejectingGateway;

#[async_trait::async_trait]
impl CheckoutGateway for RejectingGateway {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn initialize(&self, _request: CheckoutRequest) -> anyhow::Result<InitializeOutcome> {
        Ok(InitializeOutcome::Rejected {
            message: "insufficient merchant balance".to_string(),
        })
    }
}

pub fn charge_event(event: &str, reference: &str, appointment_id: Option<&str>) -> WebhookEvent {
    WebhookEvent {
        event: event.to_string(),
        data: WebhookData {
            reference: reference.to_string(),
            amount: Some(5000),
            metadata: appointment_id.map(|id| WebhookMetadata {
                appointment_id: Some(id.to_string()),
            }),
        },
    }
}
