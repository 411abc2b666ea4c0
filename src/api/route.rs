use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    api::handler::{db_test, health_check, home},
    sql::probe::DatabaseProbe,
};

pub struct AppState {
    pub db: DatabaseProbe,
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/db-test", get(db_test))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
