//! Shared fixtures for `freehold-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request};
use axum::response::Response;
use chrono::NaiveDate;
use freehold_core::order::ports::{Clock, ReferenceSuffixSource};
use freehold_core::OrderGenerator;
use freehold_domain::SiteConfig;
use freehold_infra::SiteState;
use tempfile::TempDir;

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct FixedSuffix(pub u16);

impl ReferenceSuffixSource for FixedSuffix {
    fn next_suffix(&self) -> u16 {
        self.0
    }
}

/// Site state over a temporary static directory containing `index.html`.
///
/// The directory lives as long as the returned `TempDir`.
pub fn site_state(backend_base_url: &str, api_key: Option<&str>) -> (SiteState, TempDir) {
    let static_dir = tempfile::tempdir().expect("temp dir should be created");
    std::fs::write(static_dir.path().join("index.html"), "<h1>Freehold</h1>")
        .expect("index should be written");

    let mut config = SiteConfig::default();
    config.server.static_dir = static_dir.path().to_path_buf();
    config.backend.base_url = backend_base_url.to_string();
    config.backend.api_key = api_key.map(str::to_string);
    config.backend.proxy_timeout_secs = 2;

    let date = NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date");
    let generator = OrderGenerator::new(Arc::new(FixedClock(date)), Arc::new(FixedSuffix(4821)))
        .with_config(config.order.clone());

    let state = SiteState::with_generator(config, generator).expect("state should build");
    (state, static_dir)
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request should build")
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should be read");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn order_form_json() -> serde_json::Value {
    serde_json::json!({
        "company": "Acme & Co.",
        "legal_entity": "Acme and Company Limited",
        "contact_name": "Wile E. Coyote",
        "contact_email": "wile@acme.example",
        "deployment": "Managed cloud",
        "scope_summary": "Depot <one> & two",
        "signer_name": "Road Runner",
        "signer_title": "Director",
        "signer_date": "2026-10-14",
        "one_off_fee": 1000,
        "monthly_fee": "100",
        "add_ons": ["Training"]
    })
}
