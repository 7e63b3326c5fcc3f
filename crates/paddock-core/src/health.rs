use axum::http::StatusCode;

/// `GET /healthz` — liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness. The portal serves degraded but valid
/// responses while external backends are unconfigured, so readiness is
/// process-level only.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
