use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Hours logged by one developer against one project on one day.
///
/// `project_id` and `developer_id` are not foreign keys and may point at
/// rows that have since been deleted. `date` is the `dd/MM/yyyy` display
/// string exactly as it was logged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: i64,
    pub project_id: i64,
    pub developer_id: i64,
    pub description: String,
    pub hours: f64,
    pub date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
