//! Portfolio-admin form actions.
//!
//! These mirror classic form posts: every outcome is a redirect back to
//! the originating admin page with `success` or `error` in the query, so
//! failures stay attached to the action the user just submitted.

use std::collections::HashMap;

use anyhow::Context as _;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::{ProjectDraft, VisualDraft};
use crate::error::PortalError;
use crate::gate::SessionContext;
use crate::state::AppState;
use crate::usecase::content::{
    CreateProjectUseCase, CreateVisualUseCase, DeleteProjectUseCase, DeleteVisualUseCase,
    SaveProjectInput, UpdateProjectUseCase, UpdateVisualUseCase, parse_gallery_urls, parse_tags,
    parse_tools_stack, slugify,
};
use crate::usecase::upload::{
    BulkVisualDefaults, BulkVisualUploadUseCase, PROJECT_IMAGES_BUCKET, UploadImageUseCase,
    UploadedFile, VISUALS_BUCKET,
};

const ADMIN_PROJECTS: &str = "/admin/projects";
const ADMIN_VISUALS: &str = "/admin/visuals";

// ── Form plumbing ────────────────────────────────────────────────────────────

#[derive(Default)]
struct AdminForm {
    text: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
    /// Repeated `image_files` parts, in submission order (bulk upload).
    image_files: Vec<UploadedFile>,
}

impl AdminForm {
    fn value(&self, key: &str) -> String {
        self.text.get(key).map(|v| v.trim().to_owned()).unwrap_or_default()
    }

    fn optional(&self, key: &str) -> Option<String> {
        Some(self.value(key)).filter(|v| !v.is_empty())
    }

    /// Checkbox semantics: present as `on` means checked.
    fn flag(&self, key: &str) -> bool {
        self.text.get(key).is_some_and(|v| v == "on")
    }

    fn file(&self, key: &str) -> Option<&UploadedFile> {
        self.files.get(key).filter(|file| !file.bytes.is_empty())
    }

    fn shot_date(&self) -> Option<NaiveDate> {
        self.optional("shot_date")
            .and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok())
    }
}

async fn read_admin_form(mut multipart: Multipart) -> Result<AdminForm, PortalError> {
    let mut form = AdminForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .context("read multipart field")?
    {
        let name = field.name().unwrap_or_default().to_owned();
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await.context("read multipart file")?;
            let file = UploadedFile {
                file_name,
                content_type,
                bytes,
            };
            if name == "image_files" {
                form.image_files.push(file);
            } else {
                form.files.insert(name, file);
            }
        } else {
            let value = field.text().await.context("read multipart value")?;
            form.text.insert(name, value);
        }
    }
    Ok(form)
}

/// `{base}?error=…` with the message percent-encoded.
fn action_error_url(base: &str, err: &PortalError) -> String {
    #[derive(Serialize)]
    struct ErrorQuery<'a> {
        error: &'a str,
    }
    let encoded = serde_qs::to_string(&ErrorQuery {
        error: &err.to_string(),
    })
    .unwrap_or_default();
    format!("{base}?{encoded}")
}

fn action_redirect(base: &str, outcome: Result<&'static str, PortalError>) -> Response {
    match outcome {
        Ok(success) => Redirect::to(&format!("{base}?success={success}")).into_response(),
        Err(err) => Redirect::to(&action_error_url(base, &err)).into_response(),
    }
}

/// Content management requires a signed-in identity on the email
/// allowlist; everyone else bounces to the admin landing page.
fn require_admin(state: &AppState, ctx: &SessionContext) -> Result<(), Response> {
    let email = ctx.identity.as_ref().and_then(|i| i.email.as_deref());
    if state.is_admin_email(email) {
        Ok(())
    } else {
        Err(Redirect::to("/admin?error=unauthorized").into_response())
    }
}

async fn maybe_upload(
    state: &AppState,
    bucket: &str,
    folder: &str,
    file: Option<&UploadedFile>,
) -> Result<Option<String>, PortalError> {
    let Some(file) = file else {
        return Ok(None);
    };
    let storage = state
        .storage
        .clone()
        .ok_or(PortalError::BackendUnconfigured)?;
    UploadImageUseCase { storage }
        .execute(bucket, folder, file)
        .await
}

// ── GET /admin ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminContextResponse {
    pub signed_in: bool,
    pub authorized: bool,
}

pub async fn admin_home(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Json<AdminContextResponse> {
    let email = ctx.identity.as_ref().and_then(|i| i.email.as_deref());
    Json(AdminContextResponse {
        signed_in: ctx.identity.is_some(),
        authorized: state.is_admin_email(email),
    })
}

// ── Projects ─────────────────────────────────────────────────────────────────

async fn project_input_from_form(
    state: &AppState,
    form: &AdminForm,
) -> Result<SaveProjectInput, PortalError> {
    let title = form.value("title");
    let slug_source = form.optional("slug").unwrap_or_else(|| title.clone());
    let uploaded_cover = maybe_upload(
        state,
        PROJECT_IMAGES_BUCKET,
        "covers",
        form.file("cover_image_file"),
    )
    .await?;
    let cover_image_url = uploaded_cover.unwrap_or_else(|| form.value("cover_image_url"));

    Ok(SaveProjectInput {
        draft: ProjectDraft {
            slug: slugify(&slug_source),
            short_description: form.value("short_description"),
            full_description: form.value("full_description"),
            problem_goal: form.value("problem_goal"),
            what_built: form.value("what_built"),
            tools_stack: parse_tools_stack(&form.value("tools_stack")),
            challenges: form.value("challenges"),
            learnings: form.value("learnings"),
            github_url: form.optional("github_url"),
            live_url: form.optional("live_url"),
            cover_image_url,
            published: form.flag("published"),
            featured: form.flag("featured"),
            title,
        },
        gallery_urls: parse_gallery_urls(&form.value("gallery_urls")),
    })
}

/// `POST /admin/projects`
pub async fn create_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = async {
        let form = read_admin_form(multipart).await?;
        let input = project_input_from_form(&state, &form).await?;
        CreateProjectUseCase {
            repo: state.project_repo(),
        }
        .execute(input)
        .await?;
        Ok("created")
    }
    .await;
    action_redirect(ADMIN_PROJECTS, outcome)
}

/// `POST /admin/projects/{id}`
pub async fn update_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = async {
        let form = read_admin_form(multipart).await?;
        let input = project_input_from_form(&state, &form).await?;
        UpdateProjectUseCase {
            repo: state.project_repo(),
        }
        .execute(id, input)
        .await?;
        Ok("updated")
    }
    .await;
    action_redirect(ADMIN_PROJECTS, outcome)
}

/// `POST /admin/projects/{id}/delete`
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<Uuid>,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = DeleteProjectUseCase {
        repo: state.project_repo(),
    }
    .execute(id)
    .await
    .map(|()| "deleted");
    action_redirect(ADMIN_PROJECTS, outcome)
}

// ── Visuals ──────────────────────────────────────────────────────────────────

async fn visual_draft_from_form(
    state: &AppState,
    form: &AdminForm,
) -> Result<VisualDraft, PortalError> {
    let uploaded_image =
        maybe_upload(state, VISUALS_BUCKET, "display", form.file("image_file")).await?;
    let uploaded_thumbnail =
        maybe_upload(state, VISUALS_BUCKET, "thumbs", form.file("thumbnail_file")).await?;

    let image_url = uploaded_image.unwrap_or_else(|| form.value("image_url"));
    let thumbnail_url = uploaded_thumbnail
        .or_else(|| form.optional("thumbnail_url"))
        .or_else(|| Some(image_url.clone()).filter(|url| !url.is_empty()));

    Ok(VisualDraft {
        title: form.value("title"),
        description: form.optional("description"),
        image_url,
        thumbnail_url,
        tags: parse_tags(&form.value("tags")),
        featured: form.flag("featured"),
        published: form.flag("published"),
        shot_date: form.shot_date(),
    })
}

/// `POST /admin/visuals`
pub async fn create_visual(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = async {
        let form = read_admin_form(multipart).await?;
        let draft = visual_draft_from_form(&state, &form).await?;
        CreateVisualUseCase {
            repo: state.visual_repo(),
        }
        .execute(draft)
        .await?;
        Ok("created")
    }
    .await;
    action_redirect(ADMIN_VISUALS, outcome)
}

/// `POST /admin/visuals/{id}`
pub async fn update_visual(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = async {
        let form = read_admin_form(multipart).await?;
        let draft = visual_draft_from_form(&state, &form).await?;
        UpdateVisualUseCase {
            repo: state.visual_repo(),
        }
        .execute(id, draft)
        .await?;
        Ok("updated")
    }
    .await;
    action_redirect(ADMIN_VISUALS, outcome)
}

/// `POST /admin/visuals/{id}/delete`
pub async fn delete_visual(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    Path(id): Path<Uuid>,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = DeleteVisualUseCase {
        repo: state.visual_repo(),
    }
    .execute(id)
    .await
    .map(|()| "deleted");
    action_redirect(ADMIN_VISUALS, outcome)
}

/// `POST /admin/visuals/bulk` — sequential file-by-file upload; the first
/// failing file aborts with its message, earlier rows remain.
pub async fn bulk_create_visuals(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
    multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&state, &ctx) {
        return denied;
    }
    let outcome = async {
        let form = read_admin_form(multipart).await?;
        let storage = state
            .storage
            .clone()
            .ok_or(PortalError::BackendUnconfigured)?;
        let defaults = BulkVisualDefaults {
            tags: parse_tags(&form.value("tags")),
            published: form.flag("published"),
            featured: form.flag("featured"),
        };
        BulkVisualUploadUseCase {
            storage,
            repo: state.visual_repo(),
        }
        .execute(&form.image_files, &defaults)
        .await?;
        Ok("uploaded")
    }
    .await;
    action_redirect(ADMIN_VISUALS, outcome)
}
