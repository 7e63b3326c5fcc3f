use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use paddock_portal::config::PortalConfig;
use paddock_portal::infra::auth::HttpAuthGateway;
use paddock_portal::infra::storage::HttpObjectStore;
use paddock_portal::router::build_router;
use paddock_portal::state::AppState;

#[tokio::main]
async fn main() {
    paddock_core::tracing::init_tracing();

    let config = PortalConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let admin_db = match &config.database_admin_url {
        Some(url) => Some(
            Database::connect(url)
                .await
                .expect("failed to connect to elevated database tier"),
        ),
        None => None,
    };

    let auth = match (&config.auth_base_url, &config.auth_api_key) {
        (Some(base_url), Some(api_key)) => Some(
            HttpAuthGateway::new(base_url, api_key).expect("failed to build auth backend client"),
        ),
        _ => {
            info!("auth backend unconfigured; all requests will resolve unauthenticated");
            None
        }
    };

    let storage = match (&config.storage_base_url, &config.storage_api_key) {
        (Some(base_url), Some(api_key)) => Some(
            HttpObjectStore::new(base_url, api_key).expect("failed to build storage client"),
        ),
        _ => {
            info!("object storage unconfigured; uploads will be refused");
            None
        }
    };

    let state = AppState {
        db,
        admin_db,
        auth,
        storage,
        admin_emails: Arc::new(config.admin_emails),
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.portal_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("portal listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
