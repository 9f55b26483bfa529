use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::{Context as _, Result};
use dashboard::api::{configure, AppState};
use dashboard::config::DashboardContext;
use database::storage::memory::MemoryStore;
use database::storage::Context;
use statistics::StatisticsManager;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// RUST_LOG overrides; query logging from the driver stays quiet by default
const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

fn init_logger() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_target(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> Result<()> {
    init_logger();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dashboard/config".to_owned());
    let ctx = DashboardContext::load_config(&config_path)?;

    let manager = StatisticsManager::new(ctx.statistics.score_field.clone());
    let state = if ctx.uses_database() {
        let db_ctx = Context::new(&ctx.database.url)
            .await
            .context("Failed to connect to database")?;
        db_ctx
            .ensure_schema()
            .await
            .context("Failed to create tables")?;
        AppState::from_context(&db_ctx, manager)
    } else {
        warn!("no database url configured, serving from an in-process store");
        AppState::in_memory(Arc::new(MemoryStore::new()), manager)
    };
    let state = web::Data::new(state);

    let (host, port) = ctx.server_address();
    info!("Dashboard API listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .workers(ctx.server.workers)
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await?;

    Ok(())
}
