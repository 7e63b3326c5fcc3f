use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use paddock_domain::cookie::{PORTAL_ACCESS_TOKEN, clear_session_cookies, set_session_cookies};
use paddock_domain::redirect::{
    LOGIN_PATH, RedirectReason, login_redirect_url, normalize_next_path,
};

use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::session::{SignInUseCase, SignOutUseCase};

// ── GET /login ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct LoginContextResponse {
    pub next: String,
    pub error: Option<String>,
    pub backend_configured: bool,
}

/// Login context for the client. The gate has already bounced
/// authenticated visitors to the landing page before this runs.
pub async fn show_login(
    State(state): State<AppState>,
    Query(query): Query<LoginPageQuery>,
) -> Json<LoginContextResponse> {
    Json(LoginContextResponse {
        next: normalize_next_path(query.next.as_deref()),
        error: query.error,
        backend_configured: state.auth.is_some(),
    })
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub next: Option<String>,
}

pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> Response {
    let next = normalize_next_path(form.next.as_deref());
    let usecase = SignInUseCase {
        auth: state.auth.clone(),
    };
    match usecase.execute(&form.email, &form.password).await {
        Ok(tokens) => {
            let jar = set_session_cookies(
                jar,
                &tokens.access_token,
                &tokens.refresh_token,
                state.cookie_domain.as_deref(),
            );
            (jar, Redirect::to(&next)).into_response()
        }
        Err(PortalError::BackendUnconfigured) => Redirect::to(&login_redirect_url(
            &next,
            Some(RedirectReason::MissingBackend),
        ))
        .into_response(),
        Err(PortalError::InvalidCredentials) => Redirect::to(&login_redirect_url(
            &next,
            Some(RedirectReason::InvalidCredentials),
        ))
        .into_response(),
        Err(err) => err.into_response(),
    }
}

// ── POST /logout ─────────────────────────────────────────────────────────────

pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    let access_token = jar
        .get(PORTAL_ACCESS_TOKEN)
        .map(|cookie| cookie.value().to_owned());
    SignOutUseCase {
        auth: state.auth.clone(),
    }
    .execute(access_token.as_deref())
    .await;

    let jar = clear_session_cookies(jar, state.cookie_domain.as_deref());
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}
