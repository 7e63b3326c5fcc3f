#![allow(async_fn_in_trait)]

use bytes::Bytes;
use uuid::Uuid;

use paddock_domain::identity::Identity;
use paddock_domain::pagination::PageRequest;
use paddock_domain::profile::Profile;

use crate::domain::types::{
    NewProjectImage, ProfileWriteError, Project, ProjectDraft, ProjectImage, SessionTokens,
    Visual, VisualDraft,
};
use crate::error::PortalError;

/// Repository for portal profiles.
///
/// Reads treat an unprovisioned profiles table as "no row"; writes report
/// classified failures so the bootstrap ladder can fall through them.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, PortalError>;

    /// Upsert through the elevated-credential tier. Returns `Ok(false)`
    /// without touching the store when no such tier is configured.
    async fn upsert_privileged(&self, profile: &Profile) -> Result<bool, ProfileWriteError>;

    /// Plain insert through the normal-credential connection.
    async fn insert(&self, profile: &Profile) -> Result<(), ProfileWriteError>;
}

/// Repository for portfolio projects and their gallery images.
pub trait ProjectRepository: Send + Sync {
    /// Published projects, featured first, newest first.
    async fn list_published(&self, page: PageRequest) -> Result<Vec<Project>, PortalError>;

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Project>, PortalError>;

    /// Gallery images ordered by `sort_order` ascending.
    async fn list_images(&self, project_id: Uuid) -> Result<Vec<ProjectImage>, PortalError>;

    async fn create(&self, draft: &ProjectDraft) -> Result<Uuid, PortalError>;

    async fn update(&self, id: Uuid, draft: &ProjectDraft) -> Result<(), PortalError>;

    /// Delete a project and its gallery rows.
    async fn delete(&self, id: Uuid) -> Result<(), PortalError>;

    /// Replace the whole gallery for a project.
    async fn replace_images(
        &self,
        project_id: Uuid,
        images: &[NewProjectImage],
    ) -> Result<(), PortalError>;
}

/// Repository for photography visuals.
pub trait VisualRepository: Send + Sync {
    /// Published visuals, featured first, newest first.
    async fn list_published(&self, page: PageRequest) -> Result<Vec<Visual>, PortalError>;

    /// One random published visual, for the home hero.
    async fn random_published(&self) -> Result<Option<Visual>, PortalError>;

    async fn create(&self, draft: &VisualDraft) -> Result<Uuid, PortalError>;

    async fn update(&self, id: Uuid, draft: &VisualDraft) -> Result<(), PortalError>;

    async fn delete(&self, id: Uuid) -> Result<(), PortalError>;
}

/// Port to the external auth backend.
pub trait AuthGateway: Send + Sync {
    /// Identity behind an access token. `Ok(None)` for any rejection —
    /// expired, revoked, malformed; errors are transport-level only.
    async fn fetch_identity(&self, access_token: &str) -> Result<Option<Identity>, PortalError>;

    /// Password sign-in. Credential rejections surface as
    /// [`PortalError::InvalidCredentials`].
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens, PortalError>;

    /// Exchange a refresh token for a renewed session. `Ok(None)` when the
    /// token is no longer honored.
    async fn refresh(
        &self,
        refresh_token: &str,
    ) -> Result<Option<(SessionTokens, Identity)>, PortalError>;

    /// Best-effort revocation; failures are logged, not surfaced.
    async fn sign_out(&self, access_token: &str) -> Result<(), PortalError>;
}

/// Port to the external object store.
pub trait ObjectStorage: Send + Sync {
    /// Upload a file and return its public URL.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, PortalError>;
}
