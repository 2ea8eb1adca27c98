use sqlx::PgPool;

use crate::projects::{dto::NewProject, repo_types::Project};

const COLUMNS: &str = "id, name, total_hours, description, cell, client, service, created_at";

impl Project {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY id"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: i64) -> anyhow::Result<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, new: &NewProject) -> anyhow::Result<Project> {
        let row = sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects (name, total_hours, description, cell, client, service)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(new.total_hours)
        .bind(&new.description)
        .bind(new.cell)
        .bind(new.client)
        .bind(new.service)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn save(&self, db: &PgPool) -> anyhow::Result<Option<Project>> {
        let row = sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
               SET name = $2, total_hours = $3, description = $4,
                   cell = $5, client = $6, service = $7
             WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(self.id)
        .bind(&self.name)
        .bind(self.total_hours)
        .bind(&self.description)
        .bind(self.cell)
        .bind(self.client)
        .bind(self.service)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// No cascade: entries logged against the project survive it.
    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
