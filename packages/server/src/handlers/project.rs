use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminToken;
use crate::extractors::multipart::AppMultipart;
use crate::extractors::path::AppPath;
use crate::media::{MediaForm, MediaResource, pipeline};
use crate::models::project::{ListedProject, Project, ProjectEnvelope};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Projects",
    operation_id = "createProject",
    summary = "Create a project",
    description = "Creates a project from a multipart form. `projectName`, `description`, \
        `projectType` (Prestigious, Ongoing, Completed, Upcoming) and the `image` file part \
        are all required. The response echoes the stored record with raw image bytes.",
    request_body(content_type = "multipart/form-data", description = "Project fields and image"),
    responses(
        (status = 201, description = "Project created", body = ProjectEnvelope),
        (status = 400, description = "Missing or invalid field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 413, description = "Image too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, multipart), fields(resource = "project", admin = %admin.subject))]
pub async fn create_project(
    admin: AdminToken,
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> Result<impl IntoResponse, AppError> {
    let form = MediaForm::read(
        multipart,
        &Project::SCHEMA,
        state.config.storage.max_image_size,
    )
    .await?;
    let model = pipeline::create::<Project>(&state.db, form).await?;

    info!(id = model.id, size = model.image.len(), "Project created");
    Ok((
        StatusCode::CREATED,
        Json(ProjectEnvelope::new("Project created successfully", model)),
    ))
}

#[utoipa::path(
    get,
    path = "/get",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List all projects",
    description = "Returns every project ordered by ID. Each entry carries the raw image bytes \
        plus `imageBase64` and `imageDataUri`; if a stored image cannot be encoded the entry \
        carries `imageError` instead and the rest of the list is unaffected.",
    responses(
        (status = 200, description = "All projects", body = Vec<ListedProject>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin), fields(resource = "project"))]
pub async fn list_projects(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<ListedProject>>, AppError> {
    Ok(Json(pipeline::list::<Project>(&state.db).await?))
}

#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Projects",
    operation_id = "updateProject",
    summary = "Update a project",
    description = "Partially updates a project. `description` and `projectType` are changed only \
        when present and non-blank; the image is replaced only when an `image` file part is \
        sent. An optional `version` part must match the stored version. `projectName` cannot \
        be changed.",
    params(("id" = i32, Path, description = "Project ID")),
    request_body(content_type = "multipart/form-data", description = "Any subset of project fields"),
    responses(
        (status = 200, description = "Project updated", body = ProjectEnvelope),
        (status = 400, description = "Invalid field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Unknown or malformed project ID (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Stale version (CONFLICT)", body = ErrorBody),
        (status = 413, description = "Image too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, multipart), fields(resource = "project", admin = %admin.subject))]
pub async fn update_project(
    admin: AdminToken,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppMultipart(multipart): AppMultipart,
) -> Result<Json<ProjectEnvelope>, AppError> {
    let form = MediaForm::read(
        multipart,
        &Project::SCHEMA,
        state.config.storage.max_image_size,
    )
    .await?;
    let model = pipeline::update::<Project>(&state.db, id, form).await?;

    info!(version = model.version, "Project updated");
    Ok(Json(ProjectEnvelope::new(
        "Project updated successfully",
        model,
    )))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Projects",
    operation_id = "deleteProject",
    summary = "Delete a project",
    description = "Permanently deletes a project and its image.",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Unknown or malformed project ID (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin), fields(resource = "project", admin = %admin.subject))]
pub async fn delete_project(
    admin: AdminToken,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    pipeline::delete::<Project>(&state.db, id).await?;

    info!("Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully".into(),
    }))
}
