//! Health report for `GET /healthz`

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::state::SiteState;

/// Overall health of the website service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub components: Vec<ComponentHealth>,
    /// Unix timestamp when the report was built
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self { is_healthy: true, components: Vec::new(), timestamp: Utc::now().timestamp() }
    }

    /// Add a component; any unhealthy component marks the service unhealthy.
    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.is_healthy &= component.is_healthy;
        self.components.push(component);
        self
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health of an individual component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

/// Reports local readiness only. The backend is not probed.
pub async fn healthz(State(state): State<SiteState>) -> Json<HealthStatus> {
    let static_dir = &state.config.server.static_dir;
    let site = if static_dir.is_dir() {
        ComponentHealth::healthy("static_site")
    } else {
        ComponentHealth::unhealthy(
            "static_site",
            format!("{} is not a directory", static_dir.display()),
        )
    };

    Json(HealthStatus::new().add_component(site))
}
