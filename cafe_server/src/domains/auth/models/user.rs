use serde::Serialize;
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use super::role::Role;

/// 사용자 정보 (데이터베이스에서 조회한 사용자)
/// User information (user retrieved from database)
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// argon2 PHC 문자열
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// 사용자 응답 (비밀번호 제외)
/// User response (without password)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    /// 사용자 ID
    #[schema(example = 1)]
    pub id: u64,

    /// 사용자명
    #[schema(example = "barista01")]
    pub username: String,

    /// 역할 이름 ("Admin", "Manager", "Staff")
    pub role: Role,

    /// 역할 ID (1 = Admin, 2 = Manager, 3 = Staff)
    #[schema(example = 3)]
    pub role_id: i32,

    /// 생성 시간
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            role_id: user.role.id(),
            created_at: user.created_at,
        }
    }
}
