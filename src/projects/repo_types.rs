use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Project record in the database.
///
/// `cell`, `client` and `service` are opaque business codes; nothing
/// resolves them against another table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub total_hours: i32,
    pub description: String,
    pub cell: i32,
    pub client: i32,
    pub service: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
