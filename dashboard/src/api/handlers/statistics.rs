use crate::api::error::ApiError;
use crate::api::state::AppState;
use actix_web::web;
use statistics::Distribution;

pub async fn get_statistics(state: web::Data<AppState>) -> Result<web::Json<Distribution>, ApiError> {
    let distribution = state
        .statistics
        .run(state.projects.as_ref(), state.thresholds.as_ref())
        .await?;
    Ok(web::Json(distribution))
}
