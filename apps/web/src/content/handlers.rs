use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::content::filter::{category_counts, filter_projects, CategoryCount, CategoryQuery};
use crate::content::models::{Portfolio, Project};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProjectListResponse {
    pub filter: &'static str,
    pub categories: Vec<CategoryCount>,
    pub projects: Vec<Project>,
}

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.content.as_ref().clone())
}

/// GET /api/v1/projects?category=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let filter = query.filter().map_err(AppError::Validation)?;
    let projects = &state.content.projects;

    Ok(Json(ProjectListResponse {
        filter: filter.label(),
        categories: category_counts(projects, filter),
        projects: filter_projects(projects, filter)
            .into_iter()
            .cloned()
            .collect(),
    }))
}
