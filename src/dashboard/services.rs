use anyhow::Context;
use tracing::debug;

use crate::{
    dashboard::{
        aggregate::{self, Snapshot},
        dto::{ChartData, DashboardStats, ProjectStatusRow},
    },
    state::AppState,
};

async fn load_snapshot(state: &AppState) -> anyhow::Result<Snapshot> {
    let snap = state
        .snapshots
        .load()
        .await
        .context("load dashboard snapshot")?;
    debug!(
        developers = snap.developers.len(),
        projects = snap.projects.len(),
        entries = snap.entries.len(),
        "dashboard snapshot loaded"
    );
    Ok(snap)
}

pub async fn dashboard_stats(
    state: &AppState,
    developer_id: Option<i64>,
) -> anyhow::Result<DashboardStats> {
    let snap = load_snapshot(state).await?;
    let scoped = aggregate::scope(&snap.projects, &snap.entries, developer_id);
    Ok(aggregate::summary(&scoped, &snap.developers))
}

pub async fn dashboard_charts(
    state: &AppState,
    developer_id: Option<i64>,
) -> anyhow::Result<ChartData> {
    let snap = load_snapshot(state).await?;
    let scoped = aggregate::scope(&snap.projects, &snap.entries, developer_id);
    Ok(aggregate::chart_data(&scoped, &snap.developers))
}

pub async fn project_overview(
    state: &AppState,
    developer_id: Option<i64>,
) -> anyhow::Result<Vec<ProjectStatusRow>> {
    let snap = load_snapshot(state).await?;
    let scoped = aggregate::scope(&snap.projects, &snap.entries, developer_id);
    Ok(aggregate::project_statuses(&scoped))
}
