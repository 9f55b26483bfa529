use crate::document::{lenient_timestamp, null_as_default};
use crate::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

/// Issue embedded in a project's issue list.
///
/// Stored issues may be partial; missing or null fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Issue {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issue: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: IssueStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub progress: String,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/issues`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub project_id: String,
    pub issue: String,
    pub summary: Option<String>,
    pub status: Option<IssueStatus>,
    pub img: Option<String>,
    pub detail: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub file: Option<String>,
    pub progress: Option<String>,
}

impl NewIssue {
    pub fn into_issue(self, now: DateTime<Utc>) -> Issue {
        Issue {
            id: Uuid::new_v4().to_string(),
            issue: self.issue,
            summary: self.summary.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            img: self.img.unwrap_or_default(),
            detail: self.detail.unwrap_or_default(),
            start: self.start.unwrap_or_default(),
            end: self.end.unwrap_or_default(),
            file: self.file.unwrap_or_default(),
            progress: self.progress.unwrap_or_default(),
            project_id: self.project_id,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Body of `PUT /api/issues/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePatch {
    pub project_id: Option<String>,
    pub issue: Option<String>,
    pub summary: Option<String>,
    pub status: Option<IssueStatus>,
    pub img: Option<String>,
    pub detail: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub file: Option<String>,
    pub progress: Option<String>,
}

impl IssuePatch {
    pub fn project_id(&self) -> Result<&str> {
        match self.project_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(DashboardError::InvalidRequest(
                "Project ID is required".to_owned(),
            )),
        }
    }
}

impl Issue {
    /// Returns the issue with `patch` applied. The id and creation time never
    /// change (a missing creation time becomes `now`); `updated_at` is set to `now`.
    pub fn patched(&self, patch: IssuePatch, now: DateTime<Utc>) -> Issue {
        Issue {
            id: self.id.clone(),
            issue: patch.issue.unwrap_or_else(|| self.issue.clone()),
            summary: patch.summary.unwrap_or_else(|| self.summary.clone()),
            status: patch.status.unwrap_or(self.status),
            img: patch.img.unwrap_or_else(|| self.img.clone()),
            detail: patch.detail.unwrap_or_else(|| self.detail.clone()),
            start: patch.start.unwrap_or_else(|| self.start.clone()),
            end: patch.end.unwrap_or_else(|| self.end.clone()),
            file: patch.file.unwrap_or_else(|| self.file.clone()),
            progress: patch.progress.unwrap_or_else(|| self.progress.clone()),
            project_id: patch.project_id.unwrap_or_else(|| self.project_id.clone()),
            created_at: self.created_at.or(Some(now)),
            updated_at: Some(now),
        }
    }
}
