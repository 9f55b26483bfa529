use crate::api::error::ApiError;
use crate::api::state::AppState;
use actix_web::web;
use model::threshold::{settings_map, ThresholdInput, ThresholdPair};
use model::{DashboardError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn get_color_settings(
    state: web::Data<AppState>,
) -> std::result::Result<web::Json<BTreeMap<String, ThresholdPair>>, ApiError> {
    let settings = state.thresholds.list_thresholds().await?;
    Ok(web::Json(settings_map(settings)))
}

/// Validates every entry up front so a bad entry leaves the stored settings untouched.
fn resolve_all(body: BTreeMap<String, ThresholdInput>) -> Result<Vec<(String, ThresholdPair)>> {
    body.into_iter()
        .map(|(field_name, input)| {
            if field_name.trim().is_empty() {
                return Err(DashboardError::InvalidRequest(
                    "field name must not be empty".to_owned(),
                ));
            }
            let pair = input.resolve().map_err(|err| match err {
                DashboardError::InvalidThreshold(reason) => {
                    DashboardError::InvalidThreshold(format!("{field_name}: {reason}"))
                }
                other => other,
            })?;
            Ok((field_name, pair))
        })
        .collect()
}

pub async fn update_color_settings(
    state: web::Data<AppState>,
    body: web::Json<BTreeMap<String, ThresholdInput>>,
) -> std::result::Result<web::Json<MessageResponse>, ApiError> {
    let entries = resolve_all(body.into_inner())?;
    for (field_name, pair) in &entries {
        state.thresholds.set_threshold(field_name, *pair).await?;
    }
    info!("{} color settings updated", entries.len());

    Ok(web::Json(MessageResponse {
        message: "Color settings updated successfully".to_string(),
    }))
}
