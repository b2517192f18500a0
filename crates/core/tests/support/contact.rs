//! Mock contact gateway and form view

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use freehold_core::contact::ports::{ContactFormView, ContactGateway};
use freehold_core::ContactError;
use freehold_domain::{ContactForm, ContactPayload, FormStatus};

/// Gateway that records every payload and answers with a fixed result.
#[derive(Clone)]
pub struct RecordingGateway {
    result: Result<(), ContactError>,
    calls: Arc<AtomicUsize>,
    payloads: Arc<Mutex<Vec<ContactPayload>>>,
}

impl RecordingGateway {
    pub fn accepting() -> Self {
        Self::answering(Ok(()))
    }

    pub fn rejecting(status: u16, detail: Option<&str>) -> Self {
        Self::answering(Err(ContactError::Rejected { status, detail: detail.map(str::to_string) }))
    }

    pub fn unreachable() -> Self {
        Self::answering(Err(ContactError::Transport("connection refused".to_string())))
    }

    fn answering(result: Result<(), ContactError>) -> Self {
        Self { result, calls: Arc::new(AtomicUsize::new(0)), payloads: Arc::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<ContactPayload> {
        self.payloads.lock().expect("payload lock").clone()
    }
}

#[async_trait]
impl ContactGateway for RecordingGateway {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().expect("payload lock").push(payload.clone());
        self.result.clone()
    }
}

/// Form view that keeps a history of every status and toggle.
#[derive(Debug, Default)]
pub struct FakeForm {
    pub form: ContactForm,
    pub statuses: Vec<FormStatus>,
    pub submit_toggles: Vec<bool>,
    pub resets: usize,
}

impl FakeForm {
    pub fn filled() -> Self {
        Self::with(ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            message: "We would like a demo.".to_string(),
        })
    }

    pub fn with(form: ContactForm) -> Self {
        Self { form, ..Self::default() }
    }

    pub fn last_status(&self) -> Option<&FormStatus> {
        self.statuses.last()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_toggles.last().copied().unwrap_or(true)
    }
}

impl ContactFormView for FakeForm {
    fn values(&self) -> ContactForm {
        self.form.clone()
    }

    fn show_status(&mut self, status: FormStatus) {
        self.statuses.push(status);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_toggles.push(enabled);
    }

    fn reset(&mut self) {
        self.resets += 1;
        self.form = ContactForm::default();
    }
}
