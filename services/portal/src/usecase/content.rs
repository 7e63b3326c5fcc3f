use uuid::Uuid;

use paddock_domain::pagination::PageRequest;

use crate::domain::repository::{ProjectRepository, VisualRepository};
use crate::domain::types::{
    NewProjectImage, Project, ProjectDraft, ProjectImage, Visual, VisualDraft,
};
use crate::error::PortalError;

// ── Form-value parsing ───────────────────────────────────────────────────────

/// URL slug from a title or explicit slug field: lowercase, keep
/// `[a-z0-9 -]`, whitespace runs to `-`, collapse `-` runs.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut last_dash = false;
    for ch in value.trim().to_lowercase().chars() {
        let mapped = match ch {
            'a'..='z' | '0'..='9' => Some(ch),
            ' ' | '\t' | '-' => Some('-'),
            _ => None,
        };
        if let Some(mapped) = mapped {
            if mapped == '-' {
                if !last_dash && !slug.is_empty() {
                    slug.push('-');
                }
                last_dash = true;
            } else {
                slug.push(mapped);
                last_dash = false;
            }
        }
    }
    slug.trim_end_matches('-').to_owned()
}

/// Comma-separated list, trimmed, empties dropped.
pub fn parse_tools_stack(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One URL per line, trimmed, empties dropped.
pub fn parse_gallery_urls(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Comma-separated tags, deduplicated case-insensitively while keeping the
/// first spelling seen.
pub fn parse_tags(value: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tags = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if seen.insert(tag.to_lowercase()) {
            tags.push(tag.to_owned());
        }
    }
    tags
}

/// Default visual title from a file name: extension stripped, `_`/`-` runs
/// become spaces.
pub fn default_title_from_file(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let mut title = String::with_capacity(stem.len());
    let mut last_space = false;
    for ch in stem.chars() {
        if ch == '_' || ch == '-' {
            if !last_space {
                title.push(' ');
            }
            last_space = true;
        } else {
            title.push(ch);
            last_space = false;
        }
    }
    title.trim().to_owned()
}

/// Generated alt text for the n-th gallery image (1-based position).
pub fn gallery_alt_text(title: &str, position: usize) -> String {
    format!("{title} image {position}")
}

// ── Public reads ─────────────────────────────────────────────────────────────

pub struct ListPublicProjectsUseCase<R: ProjectRepository> {
    pub repo: R,
}

impl<R: ProjectRepository> ListPublicProjectsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Project>, PortalError> {
        self.repo.list_published(page.clamped()).await
    }
}

pub struct GetProjectUseCase<R: ProjectRepository> {
    pub repo: R,
}

impl<R: ProjectRepository> GetProjectUseCase<R> {
    pub async fn execute(
        &self,
        slug: &str,
    ) -> Result<(Project, Vec<ProjectImage>), PortalError> {
        let project = self
            .repo
            .find_published_by_slug(slug)
            .await?
            .ok_or(PortalError::ProjectNotFound)?;
        let images = self.repo.list_images(project.id).await?;
        Ok((project, images))
    }
}

pub struct ListPublicVisualsUseCase<R: VisualRepository> {
    pub repo: R,
}

impl<R: VisualRepository> ListPublicVisualsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Visual>, PortalError> {
        self.repo.list_published(page.clamped()).await
    }
}

pub struct RandomVisualUseCase<R: VisualRepository> {
    pub repo: R,
}

impl<R: VisualRepository> RandomVisualUseCase<R> {
    pub async fn execute(&self) -> Result<Visual, PortalError> {
        self.repo
            .random_published()
            .await?
            .ok_or(PortalError::VisualNotFound)
    }
}

// ── Project management ───────────────────────────────────────────────────────

pub struct SaveProjectInput {
    pub draft: ProjectDraft,
    pub gallery_urls: Vec<String>,
}

fn gallery_rows(title: &str, urls: &[String]) -> Vec<NewProjectImage> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| NewProjectImage {
            image_url: url.clone(),
            alt_text: gallery_alt_text(title, index + 1),
            sort_order: index as i32,
        })
        .collect()
}

pub struct CreateProjectUseCase<R: ProjectRepository> {
    pub repo: R,
}

impl<R: ProjectRepository> CreateProjectUseCase<R> {
    pub async fn execute(&self, input: SaveProjectInput) -> Result<Uuid, PortalError> {
        let id = self.repo.create(&input.draft).await?;
        if !input.gallery_urls.is_empty() {
            let rows = gallery_rows(&input.draft.title, &input.gallery_urls);
            self.repo.replace_images(id, &rows).await?;
        }
        Ok(id)
    }
}

pub struct UpdateProjectUseCase<R: ProjectRepository> {
    pub repo: R,
}

impl<R: ProjectRepository> UpdateProjectUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: SaveProjectInput) -> Result<(), PortalError> {
        self.repo.update(id, &input.draft).await?;
        let rows = gallery_rows(&input.draft.title, &input.gallery_urls);
        self.repo.replace_images(id, &rows).await
    }
}

pub struct DeleteProjectUseCase<R: ProjectRepository> {
    pub repo: R,
}

impl<R: ProjectRepository> DeleteProjectUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), PortalError> {
        self.repo.delete(id).await
    }
}

// ── Visual management ────────────────────────────────────────────────────────

pub struct CreateVisualUseCase<R: VisualRepository> {
    pub repo: R,
}

impl<R: VisualRepository> CreateVisualUseCase<R> {
    pub async fn execute(&self, draft: VisualDraft) -> Result<Uuid, PortalError> {
        self.repo.create(&draft).await
    }
}

pub struct UpdateVisualUseCase<R: VisualRepository> {
    pub repo: R,
}

impl<R: VisualRepository> UpdateVisualUseCase<R> {
    pub async fn execute(&self, id: Uuid, draft: VisualDraft) -> Result<(), PortalError> {
        self.repo.update(id, &draft).await
    }
}

pub struct DeleteVisualUseCase<R: VisualRepository> {
    pub repo: R,
}

impl<R: VisualRepository> DeleteVisualUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), PortalError> {
        self.repo.delete(id).await
    }
}
