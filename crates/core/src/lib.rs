//! # Freehold Core
//!
//! Page behaviour for the Freehold website, free of browser and network code.
//!
//! This crate contains:
//! - The reveal animator
//! - The contact enquiry submitter
//! - The commercial order generator, its renderers and export handlers
//! - Port interfaces (traits) for everything the page or network provides
//!
//! ## Architecture Principles
//! - Only depends on `freehold-domain`
//! - No HTTP, filesystem or DOM code
//! - All side effects via traits

pub mod contact;
pub mod order;
pub mod reveal;

pub use contact::ports::{ContactFormView, ContactGateway};
pub use contact::{ContactError, ContactSubmitter, SubmissionOutcome};
pub use order::ports::{
    Clock, DocumentExporter, DownloadFile, DownloadSink, PrintDocument, ReferenceSuffixSource,
};
pub use order::{
    download_text, print_document, DownloadReceipt, ExportError, OrderError, OrderGenerator,
    OrderState,
};
pub use reveal::ports::{RevealPage, VisibilityObserver};
pub use reveal::RevealAnimator;
