//! Order fixtures and mock export channels

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use freehold_core::order::ports::{
    Clock, DocumentExporter, DownloadFile, DownloadSink, PrintDocument, ReferenceSuffixSource,
};
use freehold_core::{ExportError, OrderGenerator};
use freehold_domain::OrderForm;

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Hands out the given suffixes in turn, repeating the last one.
pub struct SequenceSuffix {
    values: Mutex<Vec<u16>>,
}

impl SequenceSuffix {
    pub fn new(mut values: Vec<u16>) -> Self {
        values.reverse();
        Self { values: Mutex::new(values) }
    }
}

impl ReferenceSuffixSource for SequenceSuffix {
    fn next_suffix(&self) -> u16 {
        let mut values = self.values.lock().expect("suffix lock");
        if values.len() > 1 {
            values.pop().unwrap_or(1000)
        } else {
            values.last().copied().unwrap_or(1000)
        }
    }
}

pub fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

pub fn generator(suffixes: Vec<u16>) -> OrderGenerator {
    OrderGenerator::new(Arc::new(FixedClock(order_date())), Arc::new(SequenceSuffix::new(suffixes)))
}

pub fn complete_form() -> OrderForm {
    OrderForm {
        company: "Acme & Co.".to_string(),
        legal_entity: "Acme and Company Limited".to_string(),
        contact_name: "Wile E. Coyote".to_string(),
        contact_email: "wile@acme.example".to_string(),
        deployment: "Managed cloud".to_string(),
        go_live_date: "2027-01-04".to_string(),
        scope_summary: "Rollout across two depots.".to_string(),
        signer_name: "Road Runner".to_string(),
        signer_title: "Director".to_string(),
        signer_date: "2026-10-14".to_string(),
        one_off_fee: "1000".into(),
        monthly_fee: "100".into(),
        add_ons: vec!["Priority support".to_string()],
        ..OrderForm::default()
    }
}

/// Download sink that keeps every delivered file.
#[derive(Default)]
pub struct CapturingSink {
    pub files: Mutex<Vec<DownloadFile>>,
}

impl CapturingSink {
    pub fn delivered(&self) -> Vec<DownloadFile> {
        self.files.lock().expect("sink lock").clone()
    }
}

impl DownloadSink for CapturingSink {
    fn deliver(&self, file: DownloadFile) -> Result<(), ExportError> {
        self.files.lock().expect("sink lock").push(file);
        Ok(())
    }
}

/// Print exporter that either keeps the document or behaves like a blocked
/// pop-up.
#[derive(Default)]
pub struct HeadlessPrinter {
    blocked: bool,
    pub documents: Arc<Mutex<Vec<PrintDocument>>>,
}

impl HeadlessPrinter {
    pub fn blocked() -> Self {
        Self { blocked: true, ..Self::default() }
    }

    pub fn printed(&self) -> Vec<PrintDocument> {
        self.documents.lock().expect("printer lock").clone()
    }
}

impl DocumentExporter for HeadlessPrinter {
    fn open_for_print(&self, document: PrintDocument) -> Result<(), ExportError> {
        if self.blocked {
            return Err(ExportError::WindowBlocked("pop-up blocked".to_string()));
        }
        self.documents.lock().expect("printer lock").push(document);
        Ok(())
    }
}
