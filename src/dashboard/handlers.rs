use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    dashboard::{
        dto::{ChartData, DashboardStats, ProjectStatusRow, ScopeQuery},
        services,
    },
    error::ApiResult,
    state::AppState,
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/chart-data", get(get_chart_data))
        .route("/dashboard/projects", get(get_project_overview))
}

#[instrument(skip(state))]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(scope): Query<ScopeQuery>,
) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(services::dashboard_stats(&state, scope.developer_id).await?))
}

#[instrument(skip(state))]
pub async fn get_chart_data(
    State(state): State<AppState>,
    Query(scope): Query<ScopeQuery>,
) -> ApiResult<Json<ChartData>> {
    Ok(Json(services::dashboard_charts(&state, scope.developer_id).await?))
}

#[instrument(skip(state))]
pub async fn get_project_overview(
    State(state): State<AppState>,
    Query(scope): Query<ScopeQuery>,
) -> ApiResult<Json<Vec<ProjectStatusRow>>> {
    Ok(Json(services::project_overview(&state, scope.developer_id).await?))
}
