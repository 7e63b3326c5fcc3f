use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar};

use paddock_domain::cookie::{PORTAL_ACCESS_TOKEN, PORTAL_REFRESH_TOKEN};
use paddock_portal::domain::types::SessionTokens;
use paddock_portal::error::PortalError;
use paddock_portal::usecase::session::{ResolveSessionUseCase, SignInUseCase};

use crate::helpers::{MockAuthGateway, test_identity};

fn jar_with(cookies: &[(&'static str, &str)]) -> CookieJar {
    let mut jar = CookieJar::new();
    for (name, value) in cookies {
        jar = jar.add(Cookie::new(*name, value.to_string()));
    }
    jar
}

#[tokio::test]
async fn should_resolve_none_when_backend_unconfigured() {
    let usecase: ResolveSessionUseCase<Arc<MockAuthGateway>> = ResolveSessionUseCase {
        auth: None,
        cookie_domain: None,
    };
    let jar = jar_with(&[(PORTAL_ACCESS_TOKEN, "anything")]);

    let (_jar, identity) = usecase.execute(jar).await;
    assert!(identity.is_none());
}

#[tokio::test]
async fn should_resolve_identity_from_valid_access_token() {
    let gateway = Arc::new(MockAuthGateway::with_access_token("tok-1", test_identity()));
    let usecase = ResolveSessionUseCase {
        auth: Some(gateway),
        cookie_domain: None,
    };
    let jar = jar_with(&[(PORTAL_ACCESS_TOKEN, "tok-1")]);

    let (jar, identity) = usecase.execute(jar).await;

    assert_eq!(identity.unwrap().id, test_identity().id);
    // No renewal happened, the original cookie value is untouched.
    assert_eq!(jar.get(PORTAL_ACCESS_TOKEN).unwrap().value(), "tok-1");
}

#[tokio::test]
async fn should_renew_session_from_refresh_token() {
    let mut gateway = MockAuthGateway::default();
    gateway.refreshes.insert(
        "ref-1".to_owned(),
        (
            SessionTokens {
                access_token: "tok-2".to_owned(),
                refresh_token: "ref-2".to_owned(),
            },
            test_identity(),
        ),
    );
    let usecase = ResolveSessionUseCase {
        auth: Some(Arc::new(gateway)),
        cookie_domain: None,
    };
    let jar = jar_with(&[
        (PORTAL_ACCESS_TOKEN, "expired"),
        (PORTAL_REFRESH_TOKEN, "ref-1"),
    ]);

    let (jar, identity) = usecase.execute(jar).await;

    assert!(identity.is_some());
    // Sliding renewal rewrote both cookies on the outgoing jar.
    assert_eq!(jar.get(PORTAL_ACCESS_TOKEN).unwrap().value(), "tok-2");
    assert_eq!(jar.get(PORTAL_REFRESH_TOKEN).unwrap().value(), "ref-2");
}

#[tokio::test]
async fn should_resolve_none_when_refresh_is_rejected() {
    let usecase = ResolveSessionUseCase {
        auth: Some(Arc::new(MockAuthGateway::default())),
        cookie_domain: None,
    };
    let jar = jar_with(&[
        (PORTAL_ACCESS_TOKEN, "expired"),
        (PORTAL_REFRESH_TOKEN, "revoked"),
    ]);

    let (_jar, identity) = usecase.execute(jar).await;
    assert!(identity.is_none());
}

#[tokio::test]
async fn should_resolve_none_silently_on_transport_errors() {
    let gateway = MockAuthGateway {
        fetch_fails: true,
        ..MockAuthGateway::default()
    };
    let usecase = ResolveSessionUseCase {
        auth: Some(Arc::new(gateway)),
        cookie_domain: None,
    };
    let jar = jar_with(&[(PORTAL_ACCESS_TOKEN, "tok-1")]);

    let (_jar, identity) = usecase.execute(jar).await;
    assert!(identity.is_none());
}

#[tokio::test]
async fn should_resolve_none_without_cookies() {
    let gateway = Arc::new(MockAuthGateway::with_access_token("tok-1", test_identity()));
    let usecase = ResolveSessionUseCase {
        auth: Some(gateway),
        cookie_domain: None,
    };

    let (_jar, identity) = usecase.execute(CookieJar::new()).await;
    assert!(identity.is_none());
}

// ── SignIn ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fail_sign_in_when_backend_unconfigured() {
    let usecase: SignInUseCase<Arc<MockAuthGateway>> = SignInUseCase { auth: None };
    let result = usecase.execute("a@b.example", "pw").await;
    assert!(matches!(result, Err(PortalError::BackendUnconfigured)));
}

#[tokio::test]
async fn should_reject_bad_credentials() {
    let gateway = MockAuthGateway {
        credentials: Some(("a@b.example".to_owned(), "pw".to_owned())),
        ..MockAuthGateway::default()
    };
    let usecase = SignInUseCase {
        auth: Some(Arc::new(gateway)),
    };
    let result = usecase.execute("a@b.example", "wrong").await;
    assert!(matches!(result, Err(PortalError::InvalidCredentials)));
}

#[tokio::test]
async fn should_return_session_tokens_on_sign_in() {
    let gateway = MockAuthGateway {
        credentials: Some(("a@b.example".to_owned(), "pw".to_owned())),
        ..MockAuthGateway::default()
    };
    let usecase = SignInUseCase {
        auth: Some(Arc::new(gateway)),
    };

    let tokens = usecase.execute(" a@b.example ", " pw ").await.unwrap();
    assert_eq!(tokens.access_token, "fresh-access");
    assert_eq!(tokens.refresh_token, "fresh-refresh");
}
