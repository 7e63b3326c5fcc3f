//! Guarded portal pages. The gate has already verified role and dealer
//! requirements; these handlers only render the workspace context.

use anyhow::anyhow;
use axum::{Extension, Json};
use serde::Serialize;

use paddock_domain::profile::Profile;

use crate::error::PortalError;
use crate::gate::SessionContext;

#[derive(Serialize)]
pub struct WorkspaceResponse {
    pub workspace: &'static str,
    pub user_id: String,
    pub display_name: Option<String>,
    pub role: String,
    pub dealer_id: Option<String>,
}

fn workspace_response(
    workspace: &'static str,
    ctx: SessionContext,
) -> Result<Json<WorkspaceResponse>, PortalError> {
    let Profile {
        id,
        dealer_id,
        role,
        display_name,
    } = ctx
        .profile
        .ok_or_else(|| anyhow!("gate allowed a guarded request without a profile"))?;
    Ok(Json(WorkspaceResponse {
        workspace,
        user_id: id.to_string(),
        display_name,
        role: role.as_str().to_owned(),
        dealer_id: dealer_id.map(|id| id.to_string()),
    }))
}

/// `GET /dashboard`
pub async fn dashboard(
    Extension(ctx): Extension<SessionContext>,
) -> Result<Json<WorkspaceResponse>, PortalError> {
    workspace_response("dashboard", ctx)
}

/// `GET /vehicles`
pub async fn vehicles(
    Extension(ctx): Extension<SessionContext>,
) -> Result<Json<WorkspaceResponse>, PortalError> {
    workspace_response("vehicles", ctx)
}

/// `GET /admin/dealers`
pub async fn admin_dealers(
    Extension(ctx): Extension<SessionContext>,
) -> Result<Json<WorkspaceResponse>, PortalError> {
    workspace_response("dealer-admin", ctx)
}
