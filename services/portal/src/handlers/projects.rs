use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use paddock_domain::pagination::PageRequest;

use crate::domain::types::{Project, ProjectImage};
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::content::{GetProjectUseCase, ListPublicProjectsUseCase};

#[derive(Serialize)]
pub struct ProjectResponse {
    pub id: String,
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
    pub featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            slug: project.slug,
            short_description: project.short_description,
            full_description: project.full_description,
            problem_goal: project.problem_goal,
            what_built: project.what_built,
            tools_stack: project.tools_stack,
            challenges: project.challenges,
            learnings: project.learnings,
            github_url: project.github_url,
            live_url: project.live_url,
            cover_image_url: project.cover_image_url,
            featured: project.featured,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ProjectImageResponse {
    pub image_url: String,
    pub alt_text: String,
    pub sort_order: i32,
}

impl From<ProjectImage> for ProjectImageResponse {
    fn from(image: ProjectImage) -> Self {
        Self {
            image_url: image.image_url,
            alt_text: image.alt_text,
            sort_order: image.sort_order,
        }
    }
}

#[derive(Serialize)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub images: Vec<ProjectImageResponse>,
}

/// `GET /projects` — published projects, featured first, newest first.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ProjectResponse>>, PortalError> {
    let usecase = ListPublicProjectsUseCase {
        repo: state.project_repo(),
    };
    let projects = usecase.execute(page).await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// `GET /projects/{slug}` — one published project with its gallery.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectDetailResponse>, PortalError> {
    let usecase = GetProjectUseCase {
        repo: state.project_repo(),
    };
    let (project, images) = usecase.execute(&slug).await?;
    Ok(Json(ProjectDetailResponse {
        project: project.into(),
        images: images.into_iter().map(Into::into).collect(),
    }))
}
