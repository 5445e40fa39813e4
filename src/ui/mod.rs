//! Server-rendered pages. Reads go straight to the database; forms post JSON
//! to the API and navigate once the write succeeds.

pub mod home;
pub mod layout;
pub mod milestone_form;
pub mod project_detail;
pub mod projects;
pub mod reminders;
pub mod weekly_progress_form;

use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use crate::AppState;
use crate::error::AppError;
use crate::ui::layout::{escape, page};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/projects", get(projects::projects_page))
        .route("/projects/new", get(projects::new_project_page))
        .route("/projects/{id}", get(project_detail::project_detail_page))
        .route("/projects/{id}/milestones/new", get(milestone_form::new_milestone_page))
        .route("/weekly-progress/new", get(weekly_progress_form::new_weekly_progress_page))
        .route("/reminders", get(reminders::reminders_page))
}

/// Error rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if let AppError::Store(err) = &self.0 {
            tracing::error!(error = %err, "page failed to load");
        }
        let title = match &self.0 {
            AppError::NotFound(_) => "Not found",
            _ => "Something went wrong",
        };
        let body = format!(
            "<div class=\"card\"><h1>{title}</h1><p class=\"muted\">{}</p>\
             <a href=\"/projects\">&larr; Back to Projects</a></div>",
            escape(&self.0.public_message())
        );
        (status, Html(page(title, &body))).into_response()
    }
}
