use sqlx::PgPool;

use crate::developers::repo_types::Developer;

const COLUMNS: &str = "id, name, email, seniority, hourly_rate, created_at";

impl Developer {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Developer>> {
        let rows = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {COLUMNS} FROM developers ORDER BY id"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: i64) -> anyhow::Result<Option<Developer>> {
        let row = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {COLUMNS} FROM developers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<Developer>> {
        let row = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {COLUMNS} FROM developers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        seniority: &str,
        hourly_rate: f64,
    ) -> Result<Developer, sqlx::Error> {
        let row = sqlx::query_as::<_, Developer>(&format!(
            r#"
            INSERT INTO developers (name, email, seniority, hourly_rate)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(name)
        .bind(email)
        .bind(seniority)
        .bind(hourly_rate)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Writes every mutable column of `self` back to its row.
    pub async fn save(&self, db: &PgPool) -> Result<Option<Developer>, sqlx::Error> {
        let row = sqlx::query_as::<_, Developer>(&format!(
            r#"
            UPDATE developers
               SET name = $2, email = $3, seniority = $4, hourly_rate = $5
             WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.seniority)
        .bind(self.hourly_rate)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Time entries referencing the developer are left in place.
    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
