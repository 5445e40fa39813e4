use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppError;
use crate::models::{Milestone, NewMilestone};

use super::extract::ApiJson;

pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<Milestone>>, AppError> {
    let milestones = state.db.list_milestones(project_id).await?;
    Ok(Json(milestones))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewMilestone>,
) -> Result<(StatusCode, Json<Milestone>), AppError> {
    let milestone = state.db.create_milestone(&body).await?;
    Ok((StatusCode::CREATED, Json(milestone)))
}

pub async fn make_current(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Milestone>, AppError> {
    let milestone = state.db.set_current_milestone(id).await?;
    Ok(Json(milestone))
}
