use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use crate::domains::users::models::RoleResponse;

pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 역할 목록 (id 순)
    pub async fn list_roles(&self) -> Result<Vec<RoleResponse>> {
        let rows = sqlx::query("SELECT id, name FROM roles ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list roles")?;

        Ok(rows
            .iter()
            .map(|row| RoleResponse {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }
}
