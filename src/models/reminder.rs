use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProjectRef;
use super::input::{null_as_default, optional_id};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ReminderStatus {
    #[default]
    Scheduled,
    Sent,
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub project_id: i64,
    pub subject: String,
    pub message: String,
    pub recipient_email: String,
    pub reminder_date: DateTime<Utc>,
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    #[serde(default, deserialize_with = "optional_id")]
    pub project_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient_email: String,
    /// RFC 3339, or `YYYY-MM-DDTHH:MM` in local time as sent by a browser form.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderWithProject {
    #[serde(flatten)]
    pub reminder: Reminder,
    pub project: ProjectRef,
}
