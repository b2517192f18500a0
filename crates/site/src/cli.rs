//! One-off tasks run from the command line

use std::path::{Path, PathBuf};

use anyhow::Context;
use freehold_core::contact::ports::ContactFormView;
use freehold_core::{download_text, print_document, OrderState, SubmissionOutcome};
use freehold_domain::{ContactForm, FormStatus, OrderForm};
use tracing::info;

use crate::AppContext;

/// What an `order` run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReport {
    pub reference: String,
    pub download: PathBuf,
    pub printed: bool,
}

/// Generate an order from a JSON form file, save the text download and,
/// when asked, spool the print document.
pub fn run_order(ctx: &AppContext, form_path: &Path, print: bool) -> anyhow::Result<OrderReport> {
    let form: OrderForm = read_json(form_path)?;

    let mut state = OrderState::new();
    let reference = ctx
        .orders
        .generate(&form, &mut state)
        .map_err(|err| anyhow::anyhow!(err.user_message()))?
        .reference
        .clone();

    let receipt = download_text(&state, ctx.orders.clock(), &ctx.downloads)
        .map_err(|err| anyhow::anyhow!(err.user_message()))
        .context("saving order text")?;

    if print {
        print_document(&state, &ctx.printer)
            .map_err(|err| anyhow::anyhow!(err.user_message()))
            .context("opening print document")?;
    }

    info!(%reference, filename = %receipt.filename, printed = print, "order task complete");
    let download = ctx.downloads.dir().join(receipt.filename);
    Ok(OrderReport { reference, download, printed: print })
}

/// Submit a contact enquiry read from a JSON form file.
pub async fn run_contact(ctx: &AppContext, form_path: &Path) -> anyhow::Result<SubmissionOutcome> {
    let form: ContactForm = read_json(form_path)?;
    let mut view = ConsoleContactForm::new(form);
    Ok(ctx.contact.submit(&mut view).await)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Contact form backed by a file, reporting status through the log
#[derive(Debug, Default)]
pub struct ConsoleContactForm {
    form: ContactForm,
    submit_enabled: bool,
    last_status: Option<FormStatus>,
}

impl ConsoleContactForm {
    pub fn new(form: ContactForm) -> Self {
        Self { form, submit_enabled: true, last_status: None }
    }

    pub fn last_status(&self) -> Option<&FormStatus> {
        self.last_status.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

impl ContactFormView for ConsoleContactForm {
    fn values(&self) -> ContactForm {
        self.form.clone()
    }

    fn show_status(&mut self, status: FormStatus) {
        info!(tone = ?status.tone, message = %status.message, "contact status");
        self.last_status = Some(status);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn reset(&mut self) {
        self.form = ContactForm::default();
    }
}
