use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{ApiError, ApiResult},
    projects::{
        dto::{CreateProjectRequest, UpdateProjectRequest},
        repo_types::Project,
    },
    state::AppState,
};

pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[instrument(skip(state))]
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(Project::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Project>> {
    Project::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Project"))
}

#[instrument(skip(state, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let new = payload.validate()?;
    let project = Project::create(&state.db, &new).await?;
    info!(project_id = %project.id, name = %project.name, "project registered");
    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(skip(state, payload))]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    let mut project = Project::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    payload.apply_to(&mut project)?;
    let saved = project
        .save(&state.db)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    info!(project_id = %id, "project updated");
    Ok(Json(saved))
}

#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Project::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Project"));
    }
    info!(project_id = %id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
