use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use paddock_domain::pagination::PageRequest;

use crate::domain::types::Visual;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::content::{ListPublicVisualsUseCase, RandomVisualUseCase};

#[derive(Serialize)]
pub struct VisualResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub shot_date: Option<chrono::NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Visual> for VisualResponse {
    fn from(visual: Visual) -> Self {
        Self {
            id: visual.id.to_string(),
            title: visual.title,
            description: visual.description,
            image_url: visual.image_url,
            thumbnail_url: visual.thumbnail_url,
            tags: visual.tags,
            featured: visual.featured,
            shot_date: visual.shot_date,
            created_at: visual.created_at,
        }
    }
}

/// `GET /visuals` — published visuals, featured first, newest first.
pub async fn list_visuals(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<VisualResponse>>, PortalError> {
    let usecase = ListPublicVisualsUseCase {
        repo: state.visual_repo(),
    };
    let visuals = usecase.execute(page).await?;
    Ok(Json(visuals.into_iter().map(Into::into).collect()))
}

/// `GET /visuals/random` — one random published visual for the home hero.
pub async fn random_visual(
    State(state): State<AppState>,
) -> Result<Json<VisualResponse>, PortalError> {
    let usecase = RandomVisualUseCase {
        repo: state.visual_repo(),
    };
    Ok(Json(usecase.execute().await?.into()))
}
