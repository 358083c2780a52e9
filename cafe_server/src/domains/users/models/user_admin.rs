use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 생성 요청 (관리자)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateUserRequest)]
pub struct CreateUserRequest {
    #[schema(example = "barista01")]
    pub username: String,

    #[schema(example = "password123")]
    pub password: String,

    /// 1 = Admin, 2 = Manager, 3 = Staff
    #[serde(default = "default_role_id")]
    #[schema(example = 3)]
    pub role_id: i32,
}

/// 사용자 수정 요청 (관리자). 빠진 필드는 유지
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateUserRequest)]
pub struct UpdateUserRequest {
    #[schema(example = 2)]
    pub role_id: Option<i32>,

    pub password: Option<String>,
}

/// 역할 정보
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = RoleResponse)]
pub struct RoleResponse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Admin")]
    pub name: String,
}

fn default_role_id() -> i32 {
    3
}

pub const MIN_PASSWORD_LEN: usize = 4;

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username must not be empty".to_string());
        }
        validate_password(&self.password)
    }
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.role_id.is_none() && self.password.is_none() {
            return Err("Nothing to update: provide role_id and/or password".to_string());
        }
        match &self.password {
            Some(password) => validate_password(password),
            None => Ok(()),
        }
    }
}

fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}
