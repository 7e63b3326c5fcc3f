use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::auth::HttpAuthGateway;
use crate::infra::db::{DbProfileRepository, DbProjectRepository, DbVisualRepository};
use crate::infra::storage::HttpObjectStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Elevated-credential connection for the privileged profile upsert.
    pub admin_db: Option<DatabaseConnection>,
    /// `None` when the auth backend is unconfigured; the portal then treats
    /// every request as unauthenticated.
    pub auth: Option<HttpAuthGateway>,
    /// `None` when object storage is unconfigured; uploads are refused.
    pub storage: Option<HttpObjectStore>,
    /// Lowercased emails allowed to manage portfolio content.
    pub admin_emails: Arc<Vec<String>>,
    pub cookie_domain: Option<String>,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
            admin_db: self.admin_db.clone(),
        }
    }

    pub fn project_repo(&self) -> DbProjectRepository {
        DbProjectRepository {
            db: self.db.clone(),
        }
    }

    pub fn visual_repo(&self) -> DbVisualRepository {
        DbVisualRepository {
            db: self.db.clone(),
        }
    }

    pub fn is_admin_email(&self, email: Option<&str>) -> bool {
        match email {
            Some(email) if !self.admin_emails.is_empty() => {
                self.admin_emails.contains(&email.to_lowercase())
            }
            _ => false,
        }
    }
}
