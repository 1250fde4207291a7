use crate::models::health_dto::Health;
use crate::models::ping_dto::Ping;
use crate::models::upload_dao::Upload;
use crate::routes::router::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use utoipa;

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Process is up", body = Ping)),
    tag = "health"
)]
pub async fn ping() -> Json<Ping> {
    Json(Ping {
        message: "pong".to_string(),
    })
}

/// Readiness: the ledger answers and reports how many uploads it holds.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Ledger reachable", body = Health),
        (status = 503, description = "Ledger unreachable")
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>, StatusCode> {
    let uploads = Upload::count(&state.pool).await.map_err(|e| {
        tracing::error!("ledger unreachable: {:?}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(Json(Health {
        status: "ok".to_string(),
        database: "ok".to_string(),
        storage: state.config.storage_backend().to_string(),
        uploads,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::router::test::test_state;

    #[tokio::test]
    async fn test_ping() {
        assert_eq!(ping().await.0.message, "pong");
    }

    #[tokio::test]
    async fn test_health_reports_ledger_and_backend() {
        let (state, _dir) = test_state().await;
        let pool = state.pool.clone();

        let before = health(State(state.clone())).await.unwrap().0;
        assert_eq!(before.status, "ok");
        assert_eq!(before.storage, "local");
        assert_eq!(before.uploads, 0);

        sqlx::query(
            "INSERT INTO uploads (pathname, url, size, content_type, filename, category, stop_name, attribution) \
             VALUES ('Fotos/Colón/a_1.jpg', 'u', 1, 'image/jpeg', 'a_1.jpg', 'Fotos', 'Colón', 'a')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let after = health(State(state)).await.unwrap().0;
        assert_eq!(after.uploads, 1);
    }

    #[tokio::test]
    async fn test_health_unavailable_when_pool_closed() {
        let (state, _dir) = test_state().await;
        state.pool.close().await;

        let response = health(State(state)).await;
        assert_eq!(response.unwrap_err(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
