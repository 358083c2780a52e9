use thiserror::Error;
use axum::http::StatusCode;
use crate::domains::auth::models::Permission;
use super::{error_response, ApiError};

/// 인증 / 사용자 관리 관련 에러
/// Authentication and user-management errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 잘못된 사용자명 또는 비밀번호
    /// Invalid username or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("Authentication token is missing")]
    MissingToken,

    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 권한 부족
    /// Role does not grant the permission
    #[error("Permission denied: {permission:?} requires the {} role or higher", .permission.minimum_role().name())]
    Forbidden { permission: Permission },

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: u64 },

    /// 사용자명이 이미 존재함
    /// Username already exists
    #[error("Username already exists: {username}")]
    UsernameAlreadyExists { username: String },

    /// 존재하지 않는 역할
    /// Unknown role id
    #[error("Role not found: id={id}")]
    RoleNotFound { id: i32 },

    /// 자기 자신의 계정은 삭제할 수 없음
    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    /// 요청 값 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 비밀번호 검증 실패
    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::UsernameAlreadyExists { .. } => StatusCode::CONFLICT,
            AuthError::RoleNotFound { .. }
            | AuthError::CannotDeleteSelf
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        error_response(err.status_code(), err.to_string())
    }
}
