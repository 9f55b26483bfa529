use crate::document::{lenient_timestamp, null_as_default};
use crate::error::{DashboardError, Result};
use crate::issue::Issue;
use chrono::{DateTime, Utc};
use entity::check_list;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNKNOWN_PROJECT_NAME: &str = "Unknown Project";

/// Parses a client supplied project id into the store's identity type.
pub fn parse_project_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| DashboardError::InvalidIdentifier(raw.to_owned()))
}

/// Project metadata as stored in the `meta_info` document.
///
/// Every field is optional in storage; missing or null values are filled in
/// here so nothing downstream deals with absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub project_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inline_pass_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub elec_pass_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub issue_response_index: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wip_achievement_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deadline_achievement_rate: f64,
    /// Outcome metric as a fraction in [0.0, 1.0].
    #[serde(deserialize_with = "null_as_default")]
    pub final_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub remark: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            project_name: UNKNOWN_PROJECT_NAME.to_owned(),
            inline_pass_rate: 0.0,
            elec_pass_rate: 0.0,
            issue_response_index: 0.0,
            wip_achievement_rate: 0.0,
            deadline_achievement_rate: 0.0,
            final_score: 0.0,
            remark: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl ProjectMeta {
    pub fn from_document(doc: serde_json::Value) -> Result<Self> {
        if doc.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(doc)?)
    }
}

/// A project document without its issue list; issues are read separately
/// so a damaged issue never affects listings or statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub meta: ProjectMeta,
}

impl Project {
    pub fn new(meta: ProjectMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            meta,
        }
    }

    pub fn final_score(&self) -> f64 {
        self.meta.final_score
    }
}

pub fn issues_from_document(doc: serde_json::Value) -> Result<Vec<Issue>> {
    if doc.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(doc)?)
}

impl TryFrom<check_list::Model> for Project {
    type Error = DashboardError;

    fn try_from(value: check_list::Model) -> Result<Self> {
        Ok(Self {
            id: value.id,
            meta: ProjectMeta::from_document(value.meta_info)?,
        })
    }
}

/// Project as the dashboard front end consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub inline_pass_rate: f64,
    pub elec_pass_rate: f64,
    pub issue_response_index: f64,
    pub wip_achievement_rate: f64,
    pub deadline_achievement_rate: f64,
    pub final_score: f64,
    pub remark: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectView {
    /// `now` stands in for timestamps the stored document does not carry.
    pub fn from_project(project: &Project, now: DateTime<Utc>) -> Self {
        let id = project.id.to_string();
        let meta = &project.meta;
        Self {
            project_id: id.clone(),
            id,
            project_name: meta.project_name.clone(),
            inline_pass_rate: meta.inline_pass_rate,
            elec_pass_rate: meta.elec_pass_rate,
            issue_response_index: meta.issue_response_index,
            wip_achievement_rate: meta.wip_achievement_rate,
            deadline_achievement_rate: meta.deadline_achievement_rate,
            final_score: meta.final_score,
            remark: meta.remark.clone(),
            created_at: meta.created_at.unwrap_or(now),
            updated_at: meta.updated_at.unwrap_or(now),
        }
    }
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self::from_project(project, Utc::now())
    }
}
