use crate::api::error::ApiError;
use crate::api::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use model::issue::{Issue, IssuePatch, NewIssue};
use model::project::parse_project_id;
use tracing::info;

pub async fn create_issue(
    state: web::Data<AppState>,
    body: web::Json<NewIssue>,
) -> Result<HttpResponse, ApiError> {
    let new_issue = body.into_inner();
    let project_id = parse_project_id(&new_issue.project_id)?;

    let issue = new_issue.into_issue(Utc::now());
    state.projects.append_issue(project_id, issue.clone()).await?;
    info!("issue {} created in project {}", issue.id, project_id);

    Ok(HttpResponse::Created().json(issue))
}

pub async fn update_issue(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<IssuePatch>,
) -> Result<web::Json<Issue>, ApiError> {
    let issue_id = path.into_inner();
    let patch = body.into_inner();
    let project_id = parse_project_id(patch.project_id()?)?;

    let issue = state
        .projects
        .update_issue(project_id, &issue_id, patch)
        .await?;
    info!("issue {} updated in project {}", issue_id, project_id);

    Ok(web::Json(issue))
}
