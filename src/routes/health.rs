use axum::{extract::State, response::Json};

use super::AppState;
use crate::error::ApiError;
use crate::models::HealthResponse;

// GET /api/v1/health - Round-trip one query against the store
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let leagues_available = state.store.ping().await.map_err(ApiError::Unavailable)?;

    Ok(Json(HealthResponse {
        status: "healthy",
        database: "connected",
        leagues_available,
        version: state.config.api_version.clone(),
        environment: state.config.environment.clone(),
    }))
}
