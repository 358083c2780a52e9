use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::role::Role;

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Username
    /// 사용자명
    #[schema(example = "admin")]
    pub username: String,

    /// Password
    /// 비밀번호
    #[schema(example = "password123")]
    pub password: String,
}

/// 로그인 응답에 포함되는 사용자 요약
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = LoginUser)]
pub struct LoginUser {
    pub id: u64,
    pub username: String,
    pub role: Role,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// JWT Access Token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// 로그인한 사용자
    pub user: LoginUser,

    /// Success message
    /// 성공 메시지
    pub message: String,
}
