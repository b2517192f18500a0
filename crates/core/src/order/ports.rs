//! Port interfaces for order generation and export
//!
//! Time, randomness and the two browser side effects (file download and the
//! print window) sit behind these traits so the generator and the export
//! handlers can run headless.

use chrono::NaiveDate;

use super::errors::ExportError;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Source of the 4-digit reference suffix
pub trait ReferenceSuffixSource: Send + Sync {
    /// A value in `1000..=9999`
    fn next_suffix(&self) -> u16;
}

/// A file offered to the user for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Trait for delivering a download to the user
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, file: DownloadFile) -> Result<(), ExportError>;
}

/// A standalone HTML document ready for printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub title: String,
    pub html: String,
}

/// Trait for opening a printable document (a new browser window, or a
/// headless renderer)
pub trait DocumentExporter: Send + Sync {
    /// Open the document and start printing. A window that cannot be opened
    /// is reported as [`ExportError::WindowBlocked`].
    fn open_for_print(&self, document: PrintDocument) -> Result<(), ExportError>;
}
