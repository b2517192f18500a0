//! `/api/` reverse proxy to the CRM backend

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use freehold_domain::constants::BACKEND_UNREACHABLE_DETAIL;
use serde_json::json;
use tracing::{info, warn};

use super::state::SiteState;

/// Response headers that are not relayed from the backend
pub const SKIP_PROXY_HEADERS: [&str; 10] = [
    "connection",
    "content-encoding",
    "content-length",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Request headers copied to the backend when present
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, ACCEPT, USER_AGENT];

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Largest request body forwarded to the backend
const MAX_PROXY_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Forward a `GET` or `POST` under `/api/` to the backend and relay its
/// answer, error statuses included.
pub async fn proxy(State(state): State<SiteState>, request: Request) -> Response {
    let method = request.method().clone();
    if method != Method::GET && method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path_and_query =
        request.uri().path_and_query().map_or_else(|| request.uri().path(), |pq| pq.as_str());
    let target = format!("{}{}", state.backend_base_url(), path_and_query);

    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let (parts, body) = request.into_parts();

    let mut builder = state.backend.request(method.clone(), &target);
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = parts.headers.get(name) {
            builder = builder.header(name, value);
        }
    }
    if let Some(ip) = client_ip {
        builder = builder.header(X_FORWARDED_FOR, ip);
    }
    if let Some(key) = state.config.backend.api_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            builder = builder.header(X_API_KEY, key);
        }
    }

    if method == Method::POST {
        match to_bytes(body, MAX_PROXY_BODY_BYTES).await {
            Ok(bytes) if !bytes.is_empty() => builder = builder.body(bytes),
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "proxy request body rejected");
                return StatusCode::PAYLOAD_TOO_LARGE.into_response();
            }
        }
    }

    let upstream = match state.backend.send(builder).await {
        Ok(response) => response,
        Err(err) => {
            warn!(%method, %target, error = %err, "backend unreachable");
            return backend_unreachable();
        }
    };

    let status = upstream.status();
    let headers = relayed_headers(upstream.headers());
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%method, %target, error = %err, "backend response interrupted");
            return backend_unreachable();
        }
    };

    info!(%method, path = %parts.uri.path(), %status, "proxied to backend");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// Copy the backend's headers minus the hop-by-hop set
pub fn relayed_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if SKIP_PROXY_HEADERS.contains(&name.as_str()) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

fn backend_unreachable() -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "detail": BACKEND_UNREACHABLE_DETAIL }))).into_response()
}
