//! Health and version endpoints
//!
//! /health and /healthz are liveness probes: they return 200 whenever the
//! service is running, regardless of whether the remote store is reachable.
//! Static fallbacks mean an unreachable store degrades content freshness,
//! not availability, so the store only shows up as an informational flag.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::routes::json_response;
use crate::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    /// 'online' when the remote store is configured, 'static' otherwise
    pub status: &'static str,
    pub version: &'static str,
    #[serde(rename = "storeConfigured")]
    pub store_configured: bool,
    pub mode: &'static str,
    pub timestamp: String,
}

/// Handle liveness probe (/health, /healthz)
pub fn health_check(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let store_configured = state.store.is_configured();

    let response = HealthResponse {
        healthy: true,
        status: if store_configured { "online" } else { "static" },
        version: env!("CARGO_PKG_VERSION"),
        store_configured,
        mode: if state.args.dev_mode {
            "development"
        } else {
            "production"
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    json_response(StatusCode::OK, &response)
}

/// Version information for deployment verification
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub commit: &'static str,
    pub service: &'static str,
}

/// Handle version endpoint (/version)
pub fn version_info() -> Response<Full<Bytes>> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("GIT_COMMIT_SHORT").unwrap_or("unknown"),
        service: "vitrine",
    };

    json_response(StatusCode::OK, &response)
}
