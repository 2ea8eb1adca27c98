use serde::{Deserialize, Serialize};

/// `?developerId=` restriction shared by the dashboard and entry listings.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    pub developer_id: Option<i64>,
}

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    /// Planned hours of the scoped projects.
    pub total_hours: i64,
    /// Logged hours of the scoped entries.
    pub used_hours: f64,
    /// `total_hours - used_hours`, negative when over budget.
    pub remaining_hours: f64,
    /// Sum of `hours * hourlyRate`; unrounded.
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChartPoint {
    pub name: String,
    pub total_hours: i32,
    pub used_hours: f64,
    pub remaining_hours: f64,
    pub progress: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeveloperHours {
    pub name: String,
    pub hours: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyHours {
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub projects_data: Vec<ProjectChartPoint>,
    pub developers_data: Vec<DeveloperHours>,
    pub line_data: Vec<DailyHours>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Nearly Complete")]
    NearlyComplete,
    #[serde(rename = "Completed")]
    Completed,
}

/// One line of the project listing view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusRow {
    pub id: i64,
    pub name: String,
    pub total_hours: i32,
    pub used_hours: f64,
    pub remaining_hours: f64,
    pub progress: i64,
    pub status: ProjectStatus,
}
