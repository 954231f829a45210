use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::{AppConfig, CorsConfig};
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::health))
        .nest("/project", project_routes(config))
        .nest("/blog", blog_routes(config))
}

/// Project routes under the `/api/admin` prefix used by older admin clients.
/// Not part of the OpenAPI document.
pub fn legacy_project_routes(config: &AppConfig) -> Router<AppState> {
    let (router, _) = project_routes(config).split_for_parts();
    router
}

fn project_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::project::create_project))
        .routes(routes!(handlers::project::list_projects))
        .routes(routes!(handlers::project::update_project))
        .routes(routes!(handlers::project::delete_project))
        .layer(DefaultBodyLimit::max(config.storage.body_limit()))
}

fn blog_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::blog::create_blog))
        .routes(routes!(handlers::blog::list_blogs))
        .routes(routes!(handlers::blog::update_blog))
        .routes(routes!(handlers::blog::delete_blog))
        .layer(DefaultBodyLimit::max(config.storage.body_limit()))
}

/// Build the CORS layer. An empty origin list allows any origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allow_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allow_origins.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .inspect_err(|e| tracing::warn!("Ignoring invalid CORS origin '{o}': {e}"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(config.max_age))
}
