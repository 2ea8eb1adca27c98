use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    developers::{
        dto::{CreateDeveloperRequest, UpdateDeveloperRequest},
        repo_types::Developer,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

const EMAIL_TAKEN: &str = "Email already registered";

pub fn developer_routes() -> Router<AppState> {
    Router::new()
        .route("/developers", get(list_developers).post(create_developer))
        .route(
            "/developers/:id",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
}

#[instrument(skip(state))]
pub async fn list_developers(State(state): State<AppState>) -> ApiResult<Json<Vec<Developer>>> {
    Ok(Json(Developer::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Developer>> {
    Developer::find(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Developer"))
}

#[instrument(skip(state, payload))]
pub async fn create_developer(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeveloperRequest>,
) -> ApiResult<(StatusCode, Json<Developer>)> {
    let new = payload.validate()?;

    if Developer::find_by_email(&state.db, &new.email).await?.is_some() {
        warn!(email = %new.email, "email already registered");
        return Err(ApiError::Conflict(EMAIL_TAKEN.into()));
    }

    // The UNIQUE index still catches a registration racing this one.
    let dev = Developer::create(
        &state.db,
        &new.name,
        &new.email,
        new.seniority.as_str(),
        new.hourly_rate,
    )
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, EMAIL_TAKEN))?;

    info!(developer_id = %dev.id, email = %dev.email, "developer registered");
    Ok((StatusCode::CREATED, Json(dev)))
}

#[instrument(skip(state, payload))]
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDeveloperRequest>,
) -> ApiResult<Json<Developer>> {
    let mut dev = Developer::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Developer"))?;
    let previous_email = dev.email.clone();

    payload.apply_to(&mut dev)?;

    if dev.email != previous_email {
        if let Some(other) = Developer::find_by_email(&state.db, &dev.email).await? {
            if other.id != id {
                warn!(email = %dev.email, "email already registered");
                return Err(ApiError::Conflict(EMAIL_TAKEN.into()));
            }
        }
    }

    let saved = dev
        .save(&state.db)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, EMAIL_TAKEN))?
        .ok_or(ApiError::NotFound("Developer"))?;
    info!(developer_id = %id, "developer updated");
    Ok(Json(saved))
}

#[instrument(skip(state))]
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Developer::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Developer"));
    }
    info!(developer_id = %id, "developer deleted");
    Ok(StatusCode::NO_CONTENT)
}
