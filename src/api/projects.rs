use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::AppError;
use crate::models::{NewProject, Project, ProjectDetail, ProjectSummary};

use super::extract::ApiJson;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProjectSummary>>, AppError> {
    let projects = state.db.list_projects().await?;
    Ok(Json(projects))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewProject>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = state.db.create_project(&body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectDetail>, AppError> {
    let detail = state.db.get_project_detail(id).await?;
    Ok(Json(detail))
}
