//! Server-side order generation: summary JSON, text download, print HTML

use std::sync::{Mutex, MutexGuard};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use freehold_core::order::ports::{DocumentExporter, DownloadFile, DownloadSink, PrintDocument};
use freehold_core::{download_text, print_document, ExportError, OrderError, OrderState};
use freehold_domain::OrderForm;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::state::SiteState;

/// Body of `POST /orders/summary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub reference: String,
    pub generated_on: NaiveDate,
    pub text: String,
    pub filename: String,
}

/// Error answered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn internal(detail: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, detail: detail.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, detail: err.user_message() }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        warn!(error = %err, "order export failed");
        Self::internal(err.user_message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, detail: rejection.body_text() }
    }
}

fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    match slot.lock() {
        Ok(guard) => guard,
        Err(poison_err) => {
            warn!("Mutex poisoned, recovering");
            poison_err.into_inner()
        }
    }
}

/// Keeps the one file a request downloads so it can become the response body
#[derive(Default)]
struct ResponseSink(Mutex<Option<DownloadFile>>);

impl DownloadSink for ResponseSink {
    fn deliver(&self, file: DownloadFile) -> Result<(), ExportError> {
        *lock(&self.0) = Some(file);
        Ok(())
    }
}

/// Keeps the print document so it can become the response body
#[derive(Default)]
struct ResponseExporter(Mutex<Option<PrintDocument>>);

impl DocumentExporter for ResponseExporter {
    fn open_for_print(&self, document: PrintDocument) -> Result<(), ExportError> {
        *lock(&self.0) = Some(document);
        Ok(())
    }
}

fn generate(state: &SiteState, form: &OrderForm) -> Result<OrderState, ApiError> {
    let mut order = OrderState::new();
    order.replace(state.generator.build(form)?);
    Ok(order)
}

pub async fn summary(
    State(state): State<SiteState>,
    form: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(form) = form?;
    let summary = state.generator.build(&form)?;

    Ok(Json(SummaryResponse {
        filename: summary.text_filename(state.generator.clock().today()),
        reference: summary.reference,
        generated_on: summary.generated_on,
        text: summary.text,
    }))
}

pub async fn download(
    State(state): State<SiteState>,
    form: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(form) = form?;
    let order = generate(&state, &form)?;

    let sink = ResponseSink::default();
    download_text(&order, state.generator.clock(), &sink)?;
    let file = lock(&sink.0).take().ok_or_else(|| ApiError::internal("no file was produced"))?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    let headers =
        [(CONTENT_TYPE, file.content_type.to_string()), (CONTENT_DISPOSITION, disposition)];
    Ok((headers, file.bytes).into_response())
}

pub async fn print(
    State(state): State<SiteState>,
    form: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Html<String>, ApiError> {
    let Json(form) = form?;
    let order = generate(&state, &form)?;

    let exporter = ResponseExporter::default();
    print_document(&order, &exporter)?;
    let document =
        lock(&exporter.0).take().ok_or_else(|| ApiError::internal("no document was produced"))?;

    Ok(Html(document.html))
}
