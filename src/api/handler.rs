use crate::api::route::AppState;
use crate::api::schema::{DbTestResponse, HealthResponse, WelcomeResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{error, info};

pub async fn home() -> impl IntoResponse {
    Json(WelcomeResponse::default())
}

pub async fn health_check() -> impl IntoResponse {
    let json_response = HealthResponse {
        status: "ok".to_string(),
    };

    (StatusCode::OK, Json(json_response))
}

pub async fn db_test(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<DbTestResponse>)> {
    let probe_result = data.db.probe().await;

    match probe_result {
        Ok(_) => {
            info!("Database probe succeeded");
            Ok(Json(DbTestResponse::connected()))
        }
        Err(e) => {
            error!("Database probe failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbTestResponse::error(e.to_string())),
            ))
        }
    }
}
