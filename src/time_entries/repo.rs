use sqlx::PgPool;

use crate::time_entries::{dto::NewTimeEntry, repo_types::TimeEntry};

const COLUMNS: &str = "id, project_id, developer_id, description, hours, date, created_at";

impl TimeEntry {
    /// All entries, or only those of `developer_id` when given.
    pub async fn list(db: &PgPool, developer_id: Option<i64>) -> anyhow::Result<Vec<TimeEntry>> {
        let rows = match developer_id {
            Some(id) => {
                sqlx::query_as::<_, TimeEntry>(&format!(
                    "SELECT {COLUMNS} FROM time_entries WHERE developer_id = $1 ORDER BY id"
                ))
                .bind(id)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, TimeEntry>(&format!(
                    "SELECT {COLUMNS} FROM time_entries ORDER BY id"
                ))
                .fetch_all(db)
                .await?
            }
        };
        Ok(rows)
    }

    pub async fn list_by_project(db: &PgPool, project_id: i64) -> anyhow::Result<Vec<TimeEntry>> {
        let rows = sqlx::query_as::<_, TimeEntry>(&format!(
            "SELECT {COLUMNS} FROM time_entries WHERE project_id = $1 ORDER BY id"
        ))
        .bind(project_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: i64) -> anyhow::Result<Option<TimeEntry>> {
        let row = sqlx::query_as::<_, TimeEntry>(&format!(
            "SELECT {COLUMNS} FROM time_entries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, new: &NewTimeEntry) -> anyhow::Result<TimeEntry> {
        let row = sqlx::query_as::<_, TimeEntry>(&format!(
            r#"
            INSERT INTO time_entries (project_id, developer_id, description, hours, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new.project_id)
        .bind(new.developer_id)
        .bind(&new.description)
        .bind(new.hours)
        .bind(&new.date)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM time_entries WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
