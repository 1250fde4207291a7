use crate::config::constants::{BLOBS_PREFIX, UPLOAD_ENDPOINT};
use crate::config::loader::Config;
use crate::controllers::catalog::{__path_categories, __path_stations, categories, stations};
use crate::controllers::health::{__path_health, __path_ping, health, ping};
use crate::controllers::upload::{__path_upload, upload};
use crate::controllers::uploads::{__path_list_uploads, list_uploads};
use crate::models::category_dto::Category;
use crate::models::health_dto::Health;
use crate::models::ping_dto::Ping;
use crate::models::upload_dao::Upload;
use crate::models::uploadresponse_dto::{ErrorBody, UploadResponse};
use crate::services::stations::Stations;
use crate::services::storage::BlobStore;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub store: Arc<dyn BlobStore>,
    pub stations: Arc<Stations>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        ping,
        health,
        upload,
        list_uploads,
        stations,
        categories
    ),
    components(
        schemas(UploadResponse, ErrorBody, Upload, Category, Health, Ping)
    ),
    tags(
        (name = "uploads", description = "Station photo uploads"),
        (name = "catalog", description = "Stations and categories offered to contributors"),
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;

pub fn create_routes(state: AppState) -> Router {
    // Leave room above the file limit so oversized files reach the size
    // check instead of being cut off by the body limit
    let body_limit = (state.config.max_file_size as usize).saturating_mul(2);

    let mut router = Router::new()
        .route("/", get(ping))
        .route("/health", get(health))
        .route(UPLOAD_ENDPOINT, post(upload))
        .route("/api/uploads", get(list_uploads))
        .route("/api/stations", get(stations))
        .route("/api/categories", get(categories))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(root) = state.config.local_root() {
        router = router.nest_service(BLOBS_PREFIX, ServeDir::new(root));
    }

    router
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
