use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    dashboard::{aggregate::label_entries, dto::ScopeQuery},
    developers::Developer,
    error::{ApiError, ApiResult},
    projects::Project,
    state::AppState,
    time_entries::{
        dto::{CreateTimeEntryRequest, LabeledTimeEntry},
        repo_types::TimeEntry,
    },
};

pub fn time_entry_routes() -> Router<AppState> {
    Router::new()
        .route("/time-entries", get(list_time_entries).post(create_time_entry))
        .route("/time-entries/detailed", get(list_labeled_time_entries))
        .route(
            "/time-entries/by-developer/:developer_id",
            get(list_by_developer),
        )
        .route("/time-entries/by-project/:project_id", get(list_by_project))
        .route(
            "/time-entries/:id",
            get(get_time_entry).delete(delete_time_entry),
        )
}

#[instrument(skip(state))]
pub async fn list_time_entries(
    State(state): State<AppState>,
    Query(scope): Query<ScopeQuery>,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    Ok(Json(TimeEntry::list(&state.db, scope.developer_id).await?))
}

#[instrument(skip(state))]
pub async fn list_labeled_time_entries(
    State(state): State<AppState>,
    Query(scope): Query<ScopeQuery>,
) -> ApiResult<Json<Vec<LabeledTimeEntry>>> {
    let (entries, projects, developers) = tokio::try_join!(
        TimeEntry::list(&state.db, scope.developer_id),
        Project::list(&state.db),
        Developer::list(&state.db),
    )?;
    Ok(Json(label_entries(&entries, &projects, &developers)))
}

#[instrument(skip(state))]
pub async fn list_by_developer(
    State(state): State<AppState>,
    Path(developer_id): Path<i64>,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    Ok(Json(TimeEntry::list(&state.db, Some(developer_id)).await?))
}

#[instrument(skip(state))]
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    Ok(Json(TimeEntry::list_by_project(&state.db, project_id).await?))
}

#[instrument(skip(state))]
pub async fn get_time_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TimeEntry>> {
    TimeEntry::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Time entry"))
}

#[instrument(skip(state, payload))]
pub async fn create_time_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateTimeEntryRequest>,
) -> ApiResult<(StatusCode, Json<TimeEntry>)> {
    let new = payload.validate()?;
    let entry = TimeEntry::create(&state.db, &new).await?;
    info!(
        entry_id = %entry.id,
        project_id = %entry.project_id,
        developer_id = %entry.developer_id,
        hours = entry.hours,
        "time entry logged"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

#[instrument(skip(state))]
pub async fn delete_time_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !TimeEntry::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Time entry"));
    }
    info!(entry_id = %id, "time entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
