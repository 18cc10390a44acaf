//! Axum route handlers for the rendered pages.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::content::filter::CategoryQuery;
use crate::errors::AppError;
use crate::pages::{self, contact::ContactPageState, current_year};
use crate::state::AppState;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home::render(&state.content, current_year()))
}

/// GET /about
pub async fn handle_about(State(state): State<AppState>) -> Html<String> {
    Html(pages::about::render(&state.content, current_year()))
}

/// GET /experience
pub async fn handle_experience(State(state): State<AppState>) -> Html<String> {
    Html(pages::experience::render(&state.content, current_year()))
}

/// GET /projects?category=
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.filter().map_err(AppError::Validation)?;
    Ok(Html(pages::projects::render(
        &state.content,
        filter,
        current_year(),
    )))
}

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>) -> Html<String> {
    Html(pages::contact::render(
        &state.content,
        &ContactPageState::default(),
        current_year(),
    ))
}

/// Fallback for unknown paths: JSON under `/api/`, the not-found page elsewhere.
pub async fn handle_not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with("/api/") {
        return AppError::NotFound(format!("No endpoint at {path}")).into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found(&state.content, path, current_year())),
    )
        .into_response()
}
