use axum_extra::extract::CookieJar;

use paddock_domain::cookie::{PORTAL_ACCESS_TOKEN, PORTAL_REFRESH_TOKEN, set_session_cookies};
use paddock_domain::identity::Identity;

use crate::domain::repository::AuthGateway;
use crate::domain::types::SessionTokens;
use crate::error::PortalError;

// ── ResolveSession ───────────────────────────────────────────────────────────

/// Resolve the request's identity from its session cookies.
///
/// Failure is silent: every backend rejection or transport error resolves
/// to `None`. The returned jar must be attached to the outgoing response on
/// every call — a sliding renewal rewrites both cookies on it.
pub struct ResolveSessionUseCase<A: AuthGateway> {
    pub auth: Option<A>,
    pub cookie_domain: Option<String>,
}

impl<A: AuthGateway> ResolveSessionUseCase<A> {
    pub async fn execute(&self, jar: CookieJar) -> (CookieJar, Option<Identity>) {
        let Some(auth) = &self.auth else {
            // Unconfigured backend: everything is unauthenticated.
            return (jar, None);
        };

        if let Some(access) = jar.get(PORTAL_ACCESS_TOKEN).map(|c| c.value().to_owned()) {
            match auth.fetch_identity(&access).await {
                Ok(Some(identity)) => return (jar, Some(identity)),
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "identity lookup failed; treating as signed out");
                }
            }
        }

        let Some(refresh) = jar.get(PORTAL_REFRESH_TOKEN).map(|c| c.value().to_owned()) else {
            return (jar, None);
        };

        match auth.refresh(&refresh).await {
            Ok(Some((tokens, identity))) => {
                let jar = set_session_cookies(
                    jar,
                    &tokens.access_token,
                    &tokens.refresh_token,
                    self.cookie_domain.as_deref(),
                );
                (jar, Some(identity))
            }
            Ok(None) => (jar, None),
            Err(err) => {
                tracing::debug!(error = %err, "session refresh failed; treating as signed out");
                (jar, None)
            }
        }
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInUseCase<A: AuthGateway> {
    pub auth: Option<A>,
}

impl<A: AuthGateway> SignInUseCase<A> {
    pub async fn execute(&self, email: &str, password: &str) -> Result<SessionTokens, PortalError> {
        let auth = self.auth.as_ref().ok_or(PortalError::BackendUnconfigured)?;
        auth.sign_in(email.trim(), password.trim()).await
    }
}

// ── SignOut ──────────────────────────────────────────────────────────────────

pub struct SignOutUseCase<A: AuthGateway> {
    pub auth: Option<A>,
}

impl<A: AuthGateway> SignOutUseCase<A> {
    /// Best-effort backend revocation; cookie clearing is the caller's job
    /// and happens regardless.
    pub async fn execute(&self, access_token: Option<&str>) {
        if let (Some(auth), Some(token)) = (&self.auth, access_token) {
            if let Err(err) = auth.sign_out(token).await {
                tracing::warn!(error = %err, "sign-out revocation failed");
            }
        }
    }
}
