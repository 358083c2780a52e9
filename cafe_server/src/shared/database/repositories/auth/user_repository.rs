use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{anyhow, Context, Result};
use crate::domains::auth::models::{Role, User};

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, role_id)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role_id, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.id())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        row_to_user(&row)
    }

    // 사용자명으로 조회 (로그인 / 중복 확인용)
    // Get user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, role_id, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by username")?;

        row.as_ref().map(row_to_user).transpose()
    }

    // ID로 사용자 조회
    // Get user by ID
    pub async fn get_user_by_id(&self, id: u64) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, role_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// 전체 사용자 목록 (가입순)
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, password_hash, role_id, created_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        rows.iter().map(row_to_user).collect()
    }

    /// 역할 / 비밀번호 변경 (None인 필드는 유지)
    /// Returns None when the user does not exist
    pub async fn update_user(
        &self,
        id: u64,
        role: Option<Role>,
        password_hash: Option<&str>,
    ) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET role_id = COALESCE($2, role_id),
                password_hash = COALESCE($3, password_hash)
            WHERE id = $1
            RETURNING id, username, password_hash, role_id, created_at
            "#,
        )
        .bind(id as i64)
        .bind(role.map(Role::id))
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update user")?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// 사용자 삭제, 삭제된 행이 있으면 true
    pub async fn delete_user(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected() > 0)
    }

    /// 특정 역할의 사용자 수 (초기 관리자 생성 여부 판단)
    pub async fn count_by_role(&self, role: Role) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users WHERE role_id = $1")
            .bind(role.id())
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users by role")?;

        Ok(row.get::<i64, _>("count"))
    }
}

fn row_to_user(row: &PgRow) -> Result<User> {
    let role_id: i32 = row.get("role_id");
    let role = Role::from_id(role_id)
        .ok_or_else(|| anyhow!("Unknown role_id {} in users table", role_id))?;

    Ok(User {
        id: row.get::<i64, _>("id") as u64,
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        role,
        created_at: row.get("created_at"),
    })
}
