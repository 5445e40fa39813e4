use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppError;
use crate::models::{NewWeeklyProgress, WeeklyProgress};

use super::extract::ApiJson;

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewWeeklyProgress>,
) -> Result<(StatusCode, Json<WeeklyProgress>), AppError> {
    let progress = state.db.create_weekly_progress(&body).await?;
    Ok((StatusCode::CREATED, Json(progress)))
}
