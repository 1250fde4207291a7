use crate::models::upload_dao::{Upload, UploadQuery};
use crate::routes::router::AppState;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/uploads",
    params(UploadQuery),
    responses(
        (status = 200, description = "Recorded uploads, newest first", body = [Upload]),
        (status = 500, description = "Ledger unavailable")
    ),
    tag = "uploads"
)]
pub async fn list_uploads(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
) -> Result<Json<Vec<Upload>>, (StatusCode, String)> {
    Upload::list(&query, &state.pool).await.map(Json).map_err(|e| {
        error!("could not list uploads: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "could not list uploads".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::router::create_routes;
    use crate::routes::router::test::test_state;
    use axum::body::{to_bytes, Body};
    use http::Request;
    use tower::ServiceExt; // for `oneshot`

    fn record(category: &str, stop_name: &str) -> Upload {
        Upload {
            id: 0,
            pathname: format!("{category}/{stop_name}/ANONYMOUS_1.jpg"),
            url: String::new(),
            size: 1,
            content_type: "image/jpeg".to_string(),
            filename: "ANONYMOUS_1.jpg".to_string(),
            category: category.to_string(),
            stop_name: stop_name.to_string(),
            attribution: "ANONYMOUS".to_string(),
            created_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_uploads_filtered() {
        let (state, _dir) = test_state().await;
        record("Fotos", "Colón").add_to_db(&state.pool).await.unwrap();
        record("Otro", "Colón").add_to_db(&state.pool).await.unwrap();
        let app = create_routes(state);

        let req = Request::builder()
            .uri("/api/uploads?category=Fotos&stopName=Col%C3%B3n")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["pathname"], "Fotos/Colón/ANONYMOUS_1.jpg");
        assert_eq!(items[0]["stopName"], "Colón");
    }
}
