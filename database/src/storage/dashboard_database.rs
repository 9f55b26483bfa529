use crate::storage::{patch_issue_in, ProjectStore};
use async_trait::async_trait;
use entity::check_list;
use model::issue::{Issue, IssuePatch};
use model::project::{issues_from_document, Project};
use model::{DashboardError, Result};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryOrder,
    QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardDatabase {
    pub connection: Arc<DatabaseConnection>,
}

impl DashboardDatabase {
    /// Underlying connection, shared with the other storages.
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        DashboardDatabase { connection }
    }

    // row stays locked until the transaction ends
    async fn lock_project(
        &self,
        txn: &DatabaseTransaction,
        project_id: Uuid,
    ) -> Result<check_list::Model> {
        check_list::Entity::find_by_id(project_id)
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(DashboardError::NotFound("Project"))
    }

    async fn write_issues(
        &self,
        txn: &DatabaseTransaction,
        project_id: Uuid,
        issues: &[Issue],
    ) -> Result<()> {
        let active_model = check_list::ActiveModel {
            id: Set(project_id),
            issue_list: Set(serde_json::to_value(issues)?),
            ..Default::default()
        };
        active_model.update(txn).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for DashboardDatabase {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        check_list::Entity::find()
            .order_by_asc(check_list::Column::Id)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    async fn list_issues(&self, project_id: Uuid) -> Result<Vec<Issue>> {
        let model = check_list::Entity::find_by_id(project_id)
            .one(self.get_connection())
            .await?
            .ok_or(DashboardError::NotFound("Project"))?;
        issues_from_document(model.issue_list)
    }

    async fn append_issue(&self, project_id: Uuid, issue: Issue) -> Result<()> {
        let txn = self.get_connection().begin().await?;
        let model = self.lock_project(&txn, project_id).await?;

        let mut issues = issues_from_document(model.issue_list)?;
        debug!("project {} appending issue {}", project_id, issue.id);
        issues.push(issue);
        self.write_issues(&txn, project_id, &issues).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn update_issue(
        &self,
        project_id: Uuid,
        issue_id: &str,
        patch: IssuePatch,
    ) -> Result<Issue> {
        let txn = self.get_connection().begin().await?;
        let model = self.lock_project(&txn, project_id).await?;

        let mut issues = issues_from_document(model.issue_list)?;
        let updated = patch_issue_in(&mut issues, issue_id, patch)?;
        self.write_issues(&txn, project_id, &issues).await?;

        txn.commit().await?;
        Ok(updated)
    }

    async fn ping(&self) -> Result<()> {
        self.get_connection().ping().await?;
        Ok(())
    }
}
