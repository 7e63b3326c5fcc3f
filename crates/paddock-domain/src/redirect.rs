//! Redirect targets and the fixed `error` query vocabulary.

use serde::Serialize;

/// Default authenticated landing path.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Login page path, also the sole auth-entry path.
pub const LOGIN_PATH: &str = "/login";

/// Fixed vocabulary carried in the `error` redirect query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectReason {
    Forbidden,
    DealerRequired,
    ProfileMissing,
    InvalidCredentials,
    MissingBackend,
    Unauthorized,
}

impl RedirectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forbidden => "forbidden",
            Self::DealerRequired => "dealer-required",
            Self::ProfileMissing => "profile-missing",
            Self::InvalidCredentials => "invalid-credentials",
            Self::MissingBackend => "missing-backend",
            Self::Unauthorized => "unauthorized",
        }
    }
}

/// Sanitize a post-login return path. Anything that is not a local
/// absolute path (single leading `/`) falls back to the landing page,
/// closing the open-redirect hole.
pub fn normalize_next_path(value: Option<&str>) -> String {
    match value {
        Some(v) if v.starts_with('/') && !v.starts_with("//") => v.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}

#[derive(Serialize)]
struct LoginQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    next: &'a str,
}

/// `/login?[error=…&]next=…` with the next path percent-encoded.
pub fn login_redirect_url(next: &str, reason: Option<RedirectReason>) -> String {
    let query = LoginQuery {
        error: reason.map(RedirectReason::as_str),
        next,
    };
    // Serializing two scalar fields cannot fail.
    let encoded = serde_qs::to_string(&query).unwrap_or_default();
    format!("{LOGIN_PATH}?{encoded}")
}

/// `/dashboard` or `/dashboard?error=…`.
pub fn landing_redirect_url(reason: Option<RedirectReason>) -> String {
    match reason {
        Some(reason) => format!("{DEFAULT_LANDING}?error={}", reason.as_str()),
        None => DEFAULT_LANDING.to_owned(),
    }
}
