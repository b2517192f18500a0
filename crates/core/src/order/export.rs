//! Export handlers for the latest order summary

use tracing::{info, warn};

use super::errors::ExportError;
use super::ports::{Clock, DocumentExporter, DownloadFile, DownloadSink, PrintDocument};
use super::render::{render_html, DOCUMENT_TITLE};
use super::state::OrderState;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// What was handed to the download sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReceipt {
    pub filename: String,
    pub bytes: usize,
}

/// Offer the rendered text summary as a UTF-8 download.
///
/// The file is named after the customer company and the date of the
/// download, read from `clock`.
pub fn download_text(
    state: &OrderState,
    clock: &dyn Clock,
    sink: &dyn DownloadSink,
) -> Result<DownloadReceipt, ExportError> {
    let summary = state.latest().ok_or(ExportError::NotGenerated)?;

    let filename = summary.text_filename(clock.today());
    let bytes = summary.text.as_bytes().to_vec();
    let receipt = DownloadReceipt { filename: filename.clone(), bytes: bytes.len() };

    sink.deliver(DownloadFile { filename, content_type: TEXT_CONTENT_TYPE, bytes }).map_err(
        |err| {
            warn!(reference = %summary.reference, error = %err, "order download failed");
            err
        },
    )?;

    info!(reference = %summary.reference, filename = %receipt.filename, "order text downloaded");
    Ok(receipt)
}

/// Build the printable HTML document and hand it to the exporter.
pub fn print_document(
    state: &OrderState,
    exporter: &dyn DocumentExporter,
) -> Result<(), ExportError> {
    let summary = state.latest().ok_or(ExportError::NotGenerated)?;

    let document = PrintDocument {
        title: format!("{DOCUMENT_TITLE} {}", summary.reference),
        html: render_html(summary),
    };

    match exporter.open_for_print(document) {
        Ok(()) => {
            info!(reference = %summary.reference, "order print window opened");
            Ok(())
        }
        Err(err) => {
            warn!(reference = %summary.reference, error = %err, "order print unavailable");
            Err(err)
        }
    }
}
