use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;
use uuid::Uuid;

use paddock_domain::identity::Identity;

use crate::domain::repository::AuthGateway;
use crate::domain::types::SessionTokens;
use crate::error::PortalError;

/// One round trip per call, no retries; a hung backend must not pin the
/// request longer than this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external auth backend.
#[derive(Clone)]
pub struct HttpAuthGateway {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl HttpAuthGateway {
    pub fn new(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build auth backend client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

/// User document returned by the auth backend.
#[derive(Debug, Deserialize)]
struct AuthUserPayload {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    app_metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: String,
    refresh_token: String,
    user: Option<AuthUserPayload>,
}

/// Claims may arrive as strings or numbers depending on how the backend
/// was seeded; coerce scalars, drop everything else.
fn claim_string(map: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn identity_from_payload(payload: AuthUserPayload) -> Option<Identity> {
    let id = match Uuid::parse_str(payload.id.trim()) {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!(user_id = %payload.id, "auth backend returned a non-uuid user id");
            return None;
        }
    };
    Some(Identity {
        id,
        email: payload.email,
        full_name: claim_string(&payload.user_metadata, "full_name"),
        name: claim_string(&payload.user_metadata, "name"),
        role_claim: claim_string(&payload.app_metadata, "role"),
        dealer_claim: claim_string(&payload.app_metadata, "dealer_id"),
    })
}

impl AuthGateway for HttpAuthGateway {
    async fn fetch_identity(&self, access_token: &str) -> Result<Option<Identity>, PortalError> {
        let response = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("auth backend user lookup")?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let payload: AuthUserPayload = response
            .json()
            .await
            .context("decode auth backend user payload")?;
        Ok(identity_from_payload(payload))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, PortalError> {
        let response = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("auth backend sign-in")?;
        let status = response.status();
        if status.is_client_error() {
            return Err(PortalError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(
                anyhow::anyhow!("auth backend sign-in returned status {status}").into(),
            );
        }
        let payload: TokenPayload = response
            .json()
            .await
            .context("decode auth backend session payload")?;
        Ok(SessionTokens {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
        })
    }

    async fn refresh(
        &self,
        refresh_token: &str,
    ) -> Result<Option<(SessionTokens, Identity)>, PortalError> {
        let response = self
            .http
            .post(self.endpoint("token?grant_type=refresh_token"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .context("auth backend session refresh")?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let payload: TokenPayload = response
            .json()
            .await
            .context("decode auth backend refresh payload")?;
        let tokens = SessionTokens {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
        };
        Ok(payload
            .user
            .and_then(identity_from_payload)
            .map(|identity| (tokens, identity)))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), PortalError> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("auth backend sign-out")?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "sign-out revocation rejected");
        }
        Ok(())
    }
}
