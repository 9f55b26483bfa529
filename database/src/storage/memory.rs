//! In-process store holding both collections, used for tests and local runs
//! without a database.

use crate::storage::{patch_issue_in, ProjectStore, ThresholdStore};
use async_trait::async_trait;
use chrono::Utc;
use model::issue::{Issue, IssuePatch};
use model::project::Project;
use model::threshold::{ThresholdPair, ThresholdSetting};
use model::{DashboardError, Result};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

struct StoredProject {
    project: Project,
    issues: Vec<Issue>,
}

impl From<Project> for StoredProject {
    fn from(project: Project) -> Self {
        Self {
            project,
            issues: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<StoredProject>>,
    thresholds: RwLock<BTreeMap<String, ThresholdSetting>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects.into_iter().map(StoredProject::from).collect()),
            ..Default::default()
        }
    }

    pub async fn insert_project(&self, project: Project) -> Uuid {
        let id = project.id;
        self.projects.write().await.push(project.into());
        id
    }

    async fn with_stored<T>(
        &self,
        project_id: Uuid,
        f: impl FnOnce(&mut StoredProject) -> Result<T>,
    ) -> Result<T> {
        let mut projects = self.projects.write().await;
        let stored = projects
            .iter_mut()
            .find(|stored| stored.project.id == project_id)
            .ok_or(DashboardError::NotFound("Project"))?;
        f(stored)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.iter().map(|stored| stored.project.clone()).collect())
    }

    async fn list_issues(&self, project_id: Uuid) -> Result<Vec<Issue>> {
        self.with_stored(project_id, |stored| Ok(stored.issues.clone()))
            .await
    }

    async fn append_issue(&self, project_id: Uuid, issue: Issue) -> Result<()> {
        self.with_stored(project_id, |stored| {
            stored.issues.push(issue);
            Ok(())
        })
        .await
    }

    async fn update_issue(
        &self,
        project_id: Uuid,
        issue_id: &str,
        patch: IssuePatch,
    ) -> Result<Issue> {
        self.with_stored(project_id, |stored| {
            patch_issue_in(&mut stored.issues, issue_id, patch)
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ThresholdStore for MemoryStore {
    async fn get_threshold(&self, field_name: &str) -> Result<Option<ThresholdSetting>> {
        Ok(self.thresholds.read().await.get(field_name).cloned())
    }

    async fn list_thresholds(&self) -> Result<Vec<ThresholdSetting>> {
        Ok(self.thresholds.read().await.values().cloned().collect())
    }

    async fn set_threshold(&self, field_name: &str, pair: ThresholdPair) -> Result<()> {
        let setting = ThresholdSetting {
            field_name: field_name.to_owned(),
            pair,
            updated_at: Utc::now(),
        };
        self.thresholds
            .write()
            .await
            .insert(field_name.to_owned(), setting);
        Ok(())
    }
}
