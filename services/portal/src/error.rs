use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Portal service error variants.
///
/// Gate denials never reach this type — the gate responds with redirects.
/// These variants cover the JSON API surface and the admin form actions
/// (which map them onto redirect `error` parameters themselves).
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("project not found")]
    ProjectNotFound,
    #[error("visual not found")]
    VisualNotFound,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("external backend is not configured")]
    BackendUnconfigured,
    #[error("upload exceeds 15 MiB; upload an optimized image")]
    UploadTooLarge,
    #[error("only image uploads are allowed")]
    UnsupportedUpload,
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::VisualNotFound => "VISUAL_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::BackendUnconfigured => "BACKEND_UNCONFIGURED",
            Self::UploadTooLarge => "UPLOAD_TOO_LARGE",
            Self::UnsupportedUpload => "UNSUPPORTED_UPLOAD",
            Self::UploadFailed(_) => "UPLOAD_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ProjectNotFound | Self::VisualNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::BackendUnconfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedUpload => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::UploadFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client outcomes; the trace layer already records
        // method/uri/status, so only 500s are logged here.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
