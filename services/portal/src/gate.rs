//! Route-access gate.
//!
//! Runs as router middleware on every request, before any handler:
//! resolves the session (sliding renewal included), bootstraps the profile
//! when a guarded prefix matched, evaluates the access decision, and either
//! redirects or injects the session context for handlers. The renewed
//! cookie jar is attached to the response on every path, including
//! redirects and errors.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use paddock_domain::identity::Identity;
use paddock_domain::profile::Profile;
use paddock_domain::route::{evaluate_access, match_rule};

use crate::state::AppState;
use crate::usecase::profile::EnsureProfileUseCase;
use crate::usecase::session::ResolveSessionUseCase;

/// Per-request session context injected into request extensions once the
/// gate allows the request through. `profile` is only populated on guarded
/// prefixes; unguarded handlers see the identity alone.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
}

pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(str::to_owned);

    let resolver = ResolveSessionUseCase {
        auth: state.auth.clone(),
        cookie_domain: state.cookie_domain.clone(),
    };
    let (jar, identity) = resolver.execute(jar).await;

    // Profile bootstrap is only needed where a rule guards the path.
    let profile = match (&identity, match_rule(&path)) {
        (Some(identity), Some(_)) => {
            let ensure = EnsureProfileUseCase {
                repo: state.profile_repo(),
            };
            match ensure.execute(identity).await {
                Ok(profile) => profile,
                Err(err) => return (jar, err).into_response(),
            }
        }
        _ => None,
    };

    let decision = evaluate_access(&path, query.as_deref(), identity.as_ref(), profile.as_ref());
    if let Some(target) = decision.redirect_target() {
        return (jar, Redirect::to(&target)).into_response();
    }

    req.extensions_mut()
        .insert(SessionContext { identity, profile });
    let response = next.run(req).await;
    (jar, response).into_response()
}
