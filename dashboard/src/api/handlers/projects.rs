use crate::api::error::ApiError;
use crate::api::state::AppState;
use actix_web::web;
use chrono::Utc;
use model::issue::Issue;
use model::project::{parse_project_id, ProjectView};

pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<web::Json<Vec<ProjectView>>, ApiError> {
    let projects = state.projects.list_projects().await?;
    let now = Utc::now();
    let views = projects
        .iter()
        .map(|project| ProjectView::from_project(project, now))
        .collect();
    Ok(web::Json(views))
}

pub async fn list_project_issues(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<Vec<Issue>>, ApiError> {
    let project_id = parse_project_id(&path.into_inner())?;
    let issues = state.projects.list_issues(project_id).await?;
    Ok(web::Json(issues))
}
