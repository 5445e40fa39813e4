use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::input::null_as_default;
use super::{MilestoneRef, MilestoneWithProgress};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::OnHold, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub major_goal: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a project. Text fields missing or `null` default to empty so
/// the gap is reported by validation instead of by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub major_goal: String,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// Project list entry carrying its current milestone, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub current_milestone: Option<MilestoneRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub milestones: Vec<MilestoneWithProgress>,
}

impl ProjectDetail {
    pub fn current_milestone(&self) -> Option<&MilestoneWithProgress> {
        self.milestones.iter().find(|m| m.milestone.is_current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}
