use crate::api::error::ApiError;
use crate::api::handlers;
use actix_web::web;
use model::DashboardError;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError(DashboardError::InvalidRequest(err.to_string())).into()
    })
}

/// Mounts every dashboard endpoint under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health::health_check))
            .route("/projects", web::get().to(handlers::projects::list_projects))
            .route(
                "/projects/{project_id}/issues",
                web::get().to(handlers::projects::list_project_issues),
            )
            .route("/issues", web::post().to(handlers::issues::create_issue))
            .route(
                "/issues/{issue_id}",
                web::put().to(handlers::issues::update_issue),
            )
            .route(
                "/color-settings",
                web::get().to(handlers::color_settings::get_color_settings),
            )
            .route(
                "/color-settings",
                web::put().to(handlers::color_settings::update_color_settings),
            )
            .route(
                "/statistics",
                web::get().to(handlers::statistics::get_statistics),
            ),
    );
}
