use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::WeeklyProgress;
use super::input::{null_as_default, optional_id};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub const ALL: [MilestoneStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: MilestoneStatus,
    pub is_current: bool,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    #[serde(default, deserialize_with = "optional_id")]
    pub project_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<MilestoneStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_current: bool,
    /// `YYYY-MM-DD`; blank means no target.
    #[serde(default)]
    pub target_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRef {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneWithProgress {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub weekly_progress: Vec<WeeklyProgress>,
}
