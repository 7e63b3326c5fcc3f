use axum::extract::DefaultBodyLimit;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use paddock_core::health::{healthz, readyz};
use paddock_core::request_id::{propagate_request_id_layer, set_request_id_layer};

use crate::gate::access_gate;
use crate::handlers::{
    admin::{
        admin_home, bulk_create_visuals, create_project, create_visual, delete_project,
        delete_visual, update_project, update_visual,
    },
    auth::{show_login, sign_in, sign_out},
    portal::{admin_dealers, dashboard, vehicles},
    projects::{get_project, list_projects},
    visuals::{list_visuals, random_visual},
};
use crate::state::AppState;

/// Whole-request body ceiling. Individual uploads are separately capped at
/// 15 MiB by the upload adapter; this only bounds the multipart envelope,
/// sized for a bulk batch.
pub const REQUEST_BODY_LIMIT: usize = 64 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public content
        .route("/projects", get(list_projects))
        .route("/projects/{slug}", get(get_project))
        .route("/visuals", get(list_visuals))
        .route("/visuals/random", get(random_visual))
        // Auth entry
        .route("/login", get(show_login).post(sign_in))
        .route("/logout", post(sign_out))
        // Guarded portal
        .route("/dashboard", get(dashboard))
        .route("/vehicles", get(vehicles))
        .route("/admin/dealers", get(admin_dealers))
        // Portfolio admin
        .route("/admin", get(admin_home))
        .route("/admin/projects", post(create_project))
        .route("/admin/projects/{id}", post(update_project))
        .route("/admin/projects/{id}/delete", post(delete_project))
        .route("/admin/visuals", post(create_visual))
        .route("/admin/visuals/bulk", post(bulk_create_visuals))
        .route("/admin/visuals/{id}", post(update_visual))
        .route("/admin/visuals/{id}/delete", post(delete_visual))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer())
                .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
                .layer(middleware::from_fn_with_state(state.clone(), access_gate)),
        )
        .with_state(state)
}
