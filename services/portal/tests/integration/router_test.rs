//! Router-level behavior with the auth backend unconfigured: the gate must
//! degrade every guarded request to the unauthenticated path.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, MockDatabase};

use paddock_portal::router::build_router;
use paddock_portal::state::AppState;

fn unconfigured_server() -> TestServer {
    let state = AppState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        admin_db: None,
        auth: None,
        storage: None,
        admin_emails: Arc::new(vec!["ops@example.com".to_owned()]),
        cookie_domain: None,
    };
    TestServer::new(build_router(state)).unwrap()
}

fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .expect("location header")
        .to_owned()
}

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = unconfigured_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_redirect_guarded_paths_to_login_with_next() {
    let server = unconfigured_server();

    let response = server.get("/dashboard").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?next=%2Fdashboard");

    let response = server.get("/admin/dealers").await;
    assert_eq!(location(&response), "/login?next=%2Fadmin%2Fdealers");
}

#[tokio::test]
async fn should_preserve_query_in_the_next_parameter() {
    let server = unconfigured_server();
    let response = server.get("/vehicles?page=2").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?next=%2Fvehicles%3Fpage%3D2");
}

#[tokio::test]
async fn should_leave_unguarded_admin_prefixes_to_the_email_gate() {
    let server = unconfigured_server();
    let response = server.get("/admin").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_json(&serde_json::json!({
        "signed_in": false,
        "authorized": false,
    }));
}

#[tokio::test]
async fn should_show_login_context_with_backend_flag() {
    let server = unconfigured_server();
    let response = server.get("/login?next=/vehicles&error=forbidden").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_json(&serde_json::json!({
        "next": "/vehicles",
        "error": "forbidden",
        "backend_configured": false,
    }));
}

#[tokio::test]
async fn should_redirect_sign_in_with_missing_backend_error() {
    let server = unconfigured_server();
    let response = server
        .post("/login")
        .form(&[
            ("email", "jordan@apex-motors.example"),
            ("password", "secret"),
            ("next", "/vehicles"),
        ])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/login?error=missing-backend&next=%2Fvehicles"
    );
}

#[tokio::test]
async fn should_clear_cookies_on_sign_out() {
    let server = unconfigured_server();
    let response = server.post("/logout").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(response.cookie("portal_access_token").value(), "");
    assert_eq!(response.cookie("portal_refresh_token").value(), "");
}

#[tokio::test]
async fn should_bounce_unauthorized_admin_actions() {
    let server = unconfigured_server();
    let response = server
        .post("/admin/projects/00000000-0000-0000-0000-000000000001/delete")
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?error=unauthorized");
}
