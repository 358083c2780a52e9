use thiserror::Error;
use axum::http::StatusCode;
use super::{error_response, ApiError};

/// 메뉴 관련 에러
/// Menu-related errors
#[derive(Error, Debug)]
pub enum MenuError {
    /// 메뉴를 찾을 수 없음
    /// Menu not found
    #[error("Menu not found: id={id}")]
    NotFound { id: u64 },

    /// 주문 이력이 있는 메뉴는 삭제 불가
    #[error("Menu {id} has order history and cannot be deleted")]
    HasOrderHistory { id: u64 },

    /// 요청 값 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl MenuError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MenuError::NotFound { .. } => StatusCode::NOT_FOUND,
            MenuError::HasOrderHistory { .. } => StatusCode::CONFLICT,
            MenuError::Validation(_) => StatusCode::BAD_REQUEST,
            MenuError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        error_response(err.status_code(), err.to_string())
    }
}
