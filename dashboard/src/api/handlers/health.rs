use crate::api::state::AppState;
use actix_web::web;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub database: String,
}

pub async fn health_check(state: web::Data<AppState>) -> web::Json<HealthResponse> {
    let database = match state.projects.ping().await {
        Ok(()) => "connected",
        Err(err) => {
            warn!("health check could not reach the store: {}", err);
            "unreachable"
        }
    };

    web::Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        message: "Dashboard API Server is running".to_string(),
        database: database.to_string(),
    })
}
