use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, sea_query::OnConflict,
};
use uuid::Uuid;

use paddock_core::sea_ext::OrderByRandom;
use paddock_domain::pagination::PageRequest;
use paddock_domain::profile::Profile;
use paddock_domain::role::normalize_role;
use paddock_portal_schema::{profiles, project_images, projects, visuals};

use crate::domain::repository::{ProfileRepository, ProjectRepository, VisualRepository};
use crate::domain::types::{
    NewProjectImage, ProfileWriteError, Project, ProjectDraft, ProjectImage, Visual, VisualDraft,
};
use crate::error::PortalError;

/// The driver surfaces Postgres messages without SQLSTATE fields, so the
/// undefined-table condition is recognized by its message shape.
fn is_undefined_table(err: &DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("42P01") || (msg.contains("relation") && msg.contains("does not exist"))
}

fn is_permission_denied(err: &DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("42501") || msg.contains("permission denied")
}

fn classify_write_err(err: DbErr, action: &'static str) -> ProfileWriteError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        ProfileWriteError::Duplicate
    } else if is_permission_denied(&err) {
        ProfileWriteError::PermissionDenied
    } else if is_undefined_table(&err) {
        ProfileWriteError::TableMissing
    } else {
        ProfileWriteError::Other(anyhow::Error::new(err).context(action))
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
    pub admin_db: Option<DatabaseConnection>,
}

fn profile_active_model(profile: &Profile) -> profiles::ActiveModel {
    profiles::ActiveModel {
        id: Set(profile.id),
        dealer_id: Set(profile.dealer_id),
        role: Set(profile.role.as_str().to_owned()),
        display_name: Set(profile.display_name.clone()),
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: model.id,
        dealer_id: model.dealer_id,
        role: normalize_role(Some(&model.role)),
        display_name: model.display_name,
    }
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, PortalError> {
        match profiles::Entity::find_by_id(id).one(&self.db).await {
            Ok(model) => Ok(model.map(profile_from_model)),
            // An unprovisioned profiles table reads as "no row".
            Err(err) if is_undefined_table(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("find profile by id").into()),
        }
    }

    async fn upsert_privileged(&self, profile: &Profile) -> Result<bool, ProfileWriteError> {
        let Some(admin_db) = &self.admin_db else {
            return Ok(false);
        };
        profiles::Entity::insert(profile_active_model(profile))
            .on_conflict(
                OnConflict::column(profiles::Column::Id)
                    .update_columns([
                        profiles::Column::DealerId,
                        profiles::Column::Role,
                        profiles::Column::DisplayName,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(admin_db)
            .await
            .map_err(|err| classify_write_err(err, "privileged profile upsert"))?;
        Ok(true)
    }

    async fn insert(&self, profile: &Profile) -> Result<(), ProfileWriteError> {
        profile_active_model(profile)
            .insert(&self.db)
            .await
            .map_err(|err| classify_write_err(err, "insert profile"))?;
        Ok(())
    }
}

// ── Project repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProjectRepository {
    pub db: DatabaseConnection,
}

fn project_from_model(model: projects::Model) -> Project {
    Project {
        id: model.id,
        title: model.title,
        slug: model.slug,
        short_description: model.short_description,
        full_description: model.full_description,
        problem_goal: model.problem_goal,
        what_built: model.what_built,
        tools_stack: model.tools_stack,
        challenges: model.challenges,
        learnings: model.learnings,
        github_url: model.github_url,
        live_url: model.live_url,
        cover_image_url: model.cover_image_url,
        published: model.published,
        featured: model.featured,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn project_image_from_model(model: project_images::Model) -> ProjectImage {
    ProjectImage {
        id: model.id,
        project_id: model.project_id,
        image_url: model.image_url,
        alt_text: model.alt_text,
        sort_order: model.sort_order,
        created_at: model.created_at,
    }
}

fn apply_project_draft(am: &mut projects::ActiveModel, draft: &ProjectDraft) {
    am.title = Set(draft.title.clone());
    am.slug = Set(draft.slug.clone());
    am.short_description = Set(draft.short_description.clone());
    am.full_description = Set(draft.full_description.clone());
    am.problem_goal = Set(draft.problem_goal.clone());
    am.what_built = Set(draft.what_built.clone());
    am.tools_stack = Set(draft.tools_stack.clone());
    am.challenges = Set(draft.challenges.clone());
    am.learnings = Set(draft.learnings.clone());
    am.github_url = Set(draft.github_url.clone());
    am.live_url = Set(draft.live_url.clone());
    am.cover_image_url = Set(draft.cover_image_url.clone());
    am.published = Set(draft.published);
    am.featured = Set(draft.featured);
}

impl ProjectRepository for DbProjectRepository {
    async fn list_published(&self, page: PageRequest) -> Result<Vec<Project>, PortalError> {
        let result = projects::Entity::find()
            .filter(projects::Column::Published.eq(true))
            .order_by_desc(projects::Column::Featured)
            .order_by_desc(projects::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await;
        match result {
            Ok(models) => Ok(models.into_iter().map(project_from_model).collect()),
            Err(err) if is_undefined_table(&err) => Ok(Vec::new()),
            Err(err) => Err(anyhow::Error::new(err).context("list published projects").into()),
        }
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Project>, PortalError> {
        let result = projects::Entity::find()
            .filter(projects::Column::Slug.eq(slug))
            .filter(projects::Column::Published.eq(true))
            .one(&self.db)
            .await;
        match result {
            Ok(model) => Ok(model.map(project_from_model)),
            Err(err) if is_undefined_table(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("find project by slug").into()),
        }
    }

    async fn list_images(&self, project_id: Uuid) -> Result<Vec<ProjectImage>, PortalError> {
        let result = project_images::Entity::find()
            .filter(project_images::Column::ProjectId.eq(project_id))
            .order_by_asc(project_images::Column::SortOrder)
            .all(&self.db)
            .await;
        match result {
            Ok(models) => Ok(models.into_iter().map(project_image_from_model).collect()),
            Err(err) if is_undefined_table(&err) => Ok(Vec::new()),
            Err(err) => Err(anyhow::Error::new(err).context("list project images").into()),
        }
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Uuid, PortalError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut am = projects::ActiveModel {
            id: Set(id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_project_draft(&mut am, draft);
        am.insert(&self.db).await.context("create project")?;
        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: &ProjectDraft) -> Result<(), PortalError> {
        let mut am = projects::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        apply_project_draft(&mut am, draft);
        am.update(&self.db).await.context("update project")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PortalError> {
        project_images::Entity::delete_many()
            .filter(project_images::Column::ProjectId.eq(id))
            .exec(&self.db)
            .await
            .context("delete project images")?;
        projects::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete project")?;
        Ok(())
    }

    async fn replace_images(
        &self,
        project_id: Uuid,
        images: &[NewProjectImage],
    ) -> Result<(), PortalError> {
        project_images::Entity::delete_many()
            .filter(project_images::Column::ProjectId.eq(project_id))
            .exec(&self.db)
            .await
            .context("clear project gallery")?;
        if images.is_empty() {
            return Ok(());
        }
        let now = Utc::now();
        let rows = images.iter().map(|image| project_images::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id),
            image_url: Set(image.image_url.clone()),
            alt_text: Set(image.alt_text.clone()),
            sort_order: Set(image.sort_order),
            created_at: Set(now),
        });
        project_images::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .context("insert project gallery")?;
        Ok(())
    }
}

// ── Visual repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVisualRepository {
    pub db: DatabaseConnection,
}

fn visual_from_model(model: visuals::Model) -> Visual {
    Visual {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        thumbnail_url: model.thumbnail_url,
        tags: model.tags,
        featured: model.featured,
        published: model.published,
        shot_date: model.shot_date,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn apply_visual_draft(am: &mut visuals::ActiveModel, draft: &VisualDraft) {
    am.title = Set(draft.title.clone());
    am.description = Set(draft.description.clone());
    am.image_url = Set(draft.image_url.clone());
    am.thumbnail_url = Set(draft.thumbnail_url.clone());
    am.tags = Set(draft.tags.clone());
    am.featured = Set(draft.featured);
    am.published = Set(draft.published);
    am.shot_date = Set(draft.shot_date);
}

impl VisualRepository for DbVisualRepository {
    async fn list_published(&self, page: PageRequest) -> Result<Vec<Visual>, PortalError> {
        let result = visuals::Entity::find()
            .filter(visuals::Column::Published.eq(true))
            .order_by_desc(visuals::Column::Featured)
            .order_by_desc(visuals::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await;
        match result {
            Ok(models) => Ok(models.into_iter().map(visual_from_model).collect()),
            Err(err) if is_undefined_table(&err) => Ok(Vec::new()),
            Err(err) => Err(anyhow::Error::new(err).context("list published visuals").into()),
        }
    }

    async fn random_published(&self) -> Result<Option<Visual>, PortalError> {
        let result = visuals::Entity::find()
            .filter(visuals::Column::Published.eq(true))
            .order_by_random()
            .one(&self.db)
            .await;
        match result {
            Ok(model) => Ok(model.map(visual_from_model)),
            Err(err) if is_undefined_table(&err) => Ok(None),
            Err(err) => Err(anyhow::Error::new(err).context("pick random visual").into()),
        }
    }

    async fn create(&self, draft: &VisualDraft) -> Result<Uuid, PortalError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut am = visuals::ActiveModel {
            id: Set(id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_visual_draft(&mut am, draft);
        am.insert(&self.db).await.context("create visual")?;
        Ok(id)
    }

    async fn update(&self, id: Uuid, draft: &VisualDraft) -> Result<(), PortalError> {
        let mut am = visuals::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        apply_visual_draft(&mut am, draft);
        am.update(&self.db).await.context("update visual")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PortalError> {
        visuals::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete visual")?;
        Ok(())
    }
}
