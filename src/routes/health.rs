use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub webhook: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

/// GET /health — liveness plus webhook configuration status.
///
/// The webhook is never probed; the only thing that can be wrong before a
/// submission arrives is a missing destination URL.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let configured = state.webhook_url.is_some();

    let status_code = if configured {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if configured { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            webhook: ComponentHealth {
                status: if configured {
                    "configured"
                } else {
                    "unconfigured"
                }
                .to_string(),
            },
        },
    };

    (status_code, Json(response))
}
