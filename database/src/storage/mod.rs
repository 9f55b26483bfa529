pub mod color_settings_database;
pub mod dashboard_database;
pub mod memory;

use async_trait::async_trait;
use chrono::Utc;
use color_settings_database::ColorSettingsDatabase;
use dashboard_database::DashboardDatabase;
use entity::{check_list, color_settings};
use model::issue::{Issue, IssuePatch};
use model::project::Project;
use model::threshold::{ThresholdPair, ThresholdSetting};
use model::{DashboardError, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Read/write access to project documents and their embedded issues.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Issues embedded in the project, in insertion order.
    async fn list_issues(&self, project_id: Uuid) -> Result<Vec<Issue>>;

    /// Appends `issue` to the project's issue list.
    async fn append_issue(&self, project_id: Uuid, issue: Issue) -> Result<()>;

    /// Applies `patch` to the issue with `issue_id` and returns the stored result.
    async fn update_issue(
        &self,
        project_id: Uuid,
        issue_id: &str,
        patch: IssuePatch,
    ) -> Result<Issue>;

    async fn ping(&self) -> Result<()>;
}

/// Per-field threshold settings, keyed by field name.
#[async_trait]
pub trait ThresholdStore: Send + Sync {
    async fn get_threshold(&self, field_name: &str) -> Result<Option<ThresholdSetting>>;

    async fn list_thresholds(&self) -> Result<Vec<ThresholdSetting>>;

    /// Creates or overwrites the setting for `field_name`.
    async fn set_threshold(&self, field_name: &str, pair: ThresholdPair) -> Result<()>;
}

pub(crate) fn patch_issue_in(
    issues: &mut [Issue],
    issue_id: &str,
    patch: IssuePatch,
) -> Result<Issue> {
    let slot = issues
        .iter_mut()
        .find(|issue| issue.id == issue_id)
        .ok_or(DashboardError::NotFound("Issue"))?;
    *slot = slot.patched(patch, Utc::now());
    Ok(slot.clone())
}

#[derive(Clone)]
pub struct Context {
    pub connection: Arc<DatabaseConnection>,
}

impl Context {
    pub async fn new(db_url: &str) -> std::result::Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(db_url.to_owned());
        opt.sqlx_logging(false);
        let connection = Database::connect(opt).await?;
        info!("database connected");
        Ok(Context {
            connection: Arc::new(connection),
        })
    }

    pub fn dashboard_database_stg(&self) -> DashboardDatabase {
        DashboardDatabase::new(self.connection.clone())
    }

    pub fn color_settings_stg(&self) -> ColorSettingsDatabase {
        ColorSettingsDatabase::new(self.connection.clone())
    }

    /// Creates the two collections if they do not exist yet.
    pub async fn ensure_schema(&self) -> std::result::Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);
        let statements = [
            schema
                .create_table_from_entity(check_list::Entity)
                .if_not_exists()
                .to_owned(),
            schema
                .create_table_from_entity(color_settings::Entity)
                .if_not_exists()
                .to_owned(),
        ];
        for stmt in statements {
            self.connection.execute(backend.build(&stmt)).await?;
        }
        Ok(())
    }
}
