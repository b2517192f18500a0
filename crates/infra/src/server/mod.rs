//! Website service
//!
//! Serves the static site, proxies `/api/` to the CRM backend and exposes
//! the order generator over HTTP. HTTPS is served when a certificate and key
//! are configured.

pub mod health;
pub mod orders;
pub mod proxy;
pub mod state;

use std::net::SocketAddr;
use std::path::Path;

use axum::routing::{any, get, post};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use freehold_domain::{FreeholdError, Result};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use health::{ComponentHealth, HealthStatus};
pub use state::SiteState;

/// Build the router. Anything not matched is served from the static site
/// directory, which answers `405` to methods other than `GET` and `HEAD`.
pub fn router(state: SiteState) -> Router {
    let static_site = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/orders/summary", post(orders::summary))
        .route("/orders/download", post(orders::download))
        .route("/orders/print", post(orders::print))
        .route("/api/", any(proxy::proxy))
        .route("/api/{*path}", any(proxy::proxy))
        .fallback_service(static_site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
///
/// # Errors
/// Returns `FreeholdError::Config` if the TLS certificate or key cannot be
/// loaded, and `FreeholdError::Io` if binding or serving fails.
pub async fn serve(state: SiteState) -> Result<()> {
    let server = &state.config.server;
    let addr = server.addr();

    let tls = match server.tls_files() {
        Some((certfile, keyfile)) => Some(load_tls(certfile, keyfile).await?),
        None => None,
    };

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| FreeholdError::Io(format!("Failed to bind {addr}: {e}")))?;

    info!(
        url = %format!("{}://{addr}", server.scheme()),
        static_dir = %server.static_dir.display(),
        backend = %state.backend_base_url(),
        "website service listening"
    );

    let app = router(state).into_make_service_with_connect_info::<SocketAddr>();
    match tls {
        Some(config) => {
            let listener = listener
                .into_std()
                .map_err(|e| FreeholdError::Io(format!("Failed to prepare {addr}: {e}")))?;
            axum_server::from_tcp_rustls(listener, config)
                .serve(app)
                .await
                .map_err(|e| FreeholdError::Io(format!("Server error: {e}")))
        }
        None => axum::serve(listener, app)
            .await
            .map_err(|e| FreeholdError::Io(format!("Server error: {e}"))),
    }
}

async fn load_tls(certfile: &Path, keyfile: &Path) -> Result<RustlsConfig> {
    // Already installed by an earlier call.
    let _ = rustls::crypto::ring::default_provider().install_default();

    RustlsConfig::from_pem_file(certfile, keyfile).await.map_err(|e| {
        FreeholdError::Config(format!(
            "Failed to load TLS certificate {} and key {}: {e}",
            certfile.display(),
            keyfile.display()
        ))
    })
}
