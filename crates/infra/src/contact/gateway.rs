//! reqwest-backed [`ContactGateway`]

use async_trait::async_trait;
use freehold_core::contact::ports::ContactGateway;
use freehold_core::ContactError;
use freehold_domain::{ContactConfig, ContactPayload, FreeholdError};
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::http::HttpClient;

/// JSON error body returned by the CRM
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Posts enquiries as JSON to the contact endpoint, once per submit.
#[derive(Clone)]
pub struct HttpContactGateway {
    http: HttpClient,
    endpoint: Url,
}

impl HttpContactGateway {
    pub fn new(http: HttpClient, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn from_config(http: HttpClient, config: &ContactConfig) -> Result<Self, FreeholdError> {
        let endpoint = Url::parse(&config.endpoint_url).map_err(|err| {
            FreeholdError::Config(format!(
                "invalid contact endpoint '{}': {err}",
                config.endpoint_url
            ))
        })?;
        Ok(Self::new(http, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let request = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(payload);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|err| ContactError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "contact endpoint accepted enquiry");
            return Ok(());
        }

        // A body that is not JSON, or JSON without a usable detail, falls back
        // to the generic message.
        let detail = match response.bytes().await {
            Ok(bytes) => extract_detail(&bytes),
            Err(err) => {
                warn!(error = %err, "failed to read contact error body");
                None
            }
        };

        Err(ContactError::Rejected { status: status.as_u16(), detail })
    }
}

fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}
