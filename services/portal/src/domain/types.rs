//! Content types and write-classification errors.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Portfolio project as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub problem_goal: String,
    pub what_built: String,
    pub tools_stack: Vec<String>,
    pub challenges: String,
    pub learnings: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub cover_image_url: String,
    pub published: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields written when creating or updating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub problem_goal: String,
    pub what_built: String,
    pub tools_stack: Vec<String>,
    pub challenges: String,
    pub learnings: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub cover_image_url: String,
    pub published: bool,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImage {
    pub id: Uuid,
    pub project_id: Uuid,
    pub image_url: String,
    pub alt_text: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Gallery row to persist; ids and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectImage {
    pub image_url: String,
    pub alt_text: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visual {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub shot_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields written when creating or updating a visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualDraft {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub shot_date: Option<NaiveDate>,
}

/// Session token pair issued by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Classified failure of a profile write, consumed by the bootstrap
/// fallback ladder.
#[derive(Debug, thiserror::Error)]
pub enum ProfileWriteError {
    /// Unique-key conflict: another request created the row first.
    #[error("profile row already exists")]
    Duplicate,
    /// Write policy rejected the payload (SQLSTATE 42501).
    #[error("permission denied writing profile")]
    PermissionDenied,
    /// The profiles table is not provisioned (SQLSTATE 42P01).
    #[error("profiles table missing")]
    TableMissing,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
