//! JSON endpoints. Writes answer `201 Created` with the stored record; failures
//! carry `{ "error": message }`.

mod extract;
mod milestones;
mod projects;
mod reminders;
mod weekly_progress;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(projects::list).post(projects::create))
        .route("/api/projects/{id}", get(projects::detail))
        .route("/api/projects/{id}/milestones", get(milestones::list_for_project))
        .route("/api/milestones", post(milestones::create))
        .route("/api/milestones/{id}/current", post(milestones::make_current))
        .route("/api/weekly-progress", post(weekly_progress::create))
        .route("/api/reminders", get(reminders::list).post(reminders::create))
        .route("/api/reminders/{id}", delete(reminders::remove))
}
