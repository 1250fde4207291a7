use crate::models::category_dto::Category;
use crate::routes::router::AppState;
use axum::extract::{Json, State};

#[utoipa::path(
    get,
    path = "/api/stations",
    responses((status = 200, description = "Station names accepted by the picker", body = [String])),
    tag = "catalog"
)]
pub async fn stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.stations.names().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Fixed set of upload categories", body = [Category])),
    tag = "catalog"
)]
pub async fn categories() -> Json<Vec<Category>> {
    Json(Category::ALL.to_vec())
}
