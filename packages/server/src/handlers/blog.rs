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
use crate::models::blog::{Blog, BlogEnvelope, ListedBlog};
use crate::models::shared::MessageResponse;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Blogs",
    operation_id = "createBlog",
    summary = "Create a blog post",
    description = "Creates a blog post from a multipart form. `title`, `author`, \
        `date_published` (YYYY-MM-DD or RFC 3339), `content` and the `image` file part are all \
        required. The response echoes the stored record with raw image bytes.",
    request_body(content_type = "multipart/form-data", description = "Blog fields and image"),
    responses(
        (status = 201, description = "Blog created", body = BlogEnvelope),
        (status = 400, description = "Missing or invalid field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 413, description = "Image too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, multipart), fields(resource = "blog", admin = %admin.subject))]
pub async fn create_blog(
    admin: AdminToken,
    State(state): State<AppState>,
    AppMultipart(multipart): AppMultipart,
) -> Result<impl IntoResponse, AppError> {
    let form = MediaForm::read(
        multipart,
        &Blog::SCHEMA,
        state.config.storage.max_image_size,
    )
    .await?;
    let model = pipeline::create::<Blog>(&state.db, form).await?;

    info!(id = model.id, size = model.image.len(), "Blog created");
    Ok((
        StatusCode::CREATED,
        Json(BlogEnvelope::new("Blog created successfully", model)),
    ))
}

#[utoipa::path(
    get,
    path = "/get",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List all blog posts",
    description = "Returns every blog post ordered by ID. Each entry carries the raw image bytes \
        plus `imageBase64` and `imageDataUri`; if a stored image cannot be encoded the entry \
        carries `imageError` instead and the rest of the list is unaffected.",
    responses(
        (status = 200, description = "All blog posts", body = Vec<ListedBlog>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin), fields(resource = "blog"))]
pub async fn list_blogs(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> Result<Json<Vec<ListedBlog>>, AppError> {
    Ok(Json(pipeline::list::<Blog>(&state.db).await?))
}

#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Blogs",
    operation_id = "updateBlog",
    summary = "Update a blog post",
    description = "Partially updates a blog post. Each text field is changed only when present \
        and non-blank; the image is replaced only when an `image` file part is sent. An \
        optional `version` part must match the stored version.",
    params(("id" = i32, Path, description = "Blog post ID")),
    request_body(content_type = "multipart/form-data", description = "Any subset of blog fields"),
    responses(
        (status = 200, description = "Blog updated", body = BlogEnvelope),
        (status = 400, description = "Invalid field (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Unknown or malformed blog post ID (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Stale version (CONFLICT)", body = ErrorBody),
        (status = 413, description = "Image too large (PAYLOAD_TOO_LARGE)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, multipart), fields(resource = "blog", admin = %admin.subject))]
pub async fn update_blog(
    admin: AdminToken,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppMultipart(multipart): AppMultipart,
) -> Result<Json<BlogEnvelope>, AppError> {
    let form = MediaForm::read(
        multipart,
        &Blog::SCHEMA,
        state.config.storage.max_image_size,
    )
    .await?;
    let model = pipeline::update::<Blog>(&state.db, id, form).await?;

    info!(version = model.version, "Blog updated");
    Ok(Json(BlogEnvelope::new(
        "Blog updated successfully",
        model,
    )))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Blogs",
    operation_id = "deleteBlog",
    summary = "Delete a blog post",
    description = "Permanently deletes a blog post and its image.",
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Unknown or malformed blog post ID (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin), fields(resource = "blog", admin = %admin.subject))]
pub async fn delete_blog(
    admin: AdminToken,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    pipeline::delete::<Blog>(&state.db, id).await?;

    info!("Blog deleted");
    Ok(Json(MessageResponse {
        message: "Blog deleted successfully".into(),
    }))
}
