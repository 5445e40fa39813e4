use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::input::{null_as_default, optional_id};

#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    pub id: i64,
    pub milestone_id: i64,
    pub week_start_date: NaiveDate,
    pub goals_achieved: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWeeklyProgress {
    #[serde(default, deserialize_with = "optional_id")]
    pub milestone_id: Option<i64>,
    /// Any day of the reported week; blank means the current week.
    #[serde(default)]
    pub week_start_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals_achieved: bool,
    #[serde(default)]
    pub notes: Option<String>,
}
