use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppError;
use crate::models::{NewReminder, Reminder, ReminderWithProject};

use super::extract::ApiJson;

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReminderWithProject>>, AppError> {
    let reminders = state.db.list_reminders().await?;
    Ok(Json(reminders))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewReminder>,
) -> Result<(StatusCode, Json<Reminder>), AppError> {
    let reminder = state.db.create_reminder(&body).await?;
    Ok((StatusCode::CREATED, Json(reminder)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.delete_reminder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
