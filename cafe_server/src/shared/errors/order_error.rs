use thiserror::Error;
use axum::http::StatusCode;
use crate::domains::order::models::OrderStatus;
use super::{error_response, ApiError};

/// 주문 관련 에러
/// Order-related errors
#[derive(Error, Debug)]
pub enum OrderError {
    /// 주문 항목이 없음
    /// Order has no items
    #[error("Order has no items")]
    EmptyOrder,

    /// 요청 값 검증 실패 (수량, 가격)
    #[error("{0}")]
    Validation(String),

    /// 총 금액이 항목 합계와 다름
    /// totalAmount does not match the sum of line totals
    #[error("Total amount mismatch: expected {expected}, got {actual}")]
    TotalMismatch { expected: i64, actual: i64 },

    /// 주문한 메뉴가 존재하지 않음
    #[error("Menu not found: id={menu_id}")]
    MenuNotFound { menu_id: u64 },

    /// 재고 부족 (트랜잭션 전체 롤백)
    /// Insufficient stock, the whole order is rolled back
    #[error("Insufficient stock for {name} (menu id={menu_id}): requested {requested}, available {available}")]
    InsufficientStock {
        menu_id: u64,
        name: String,
        requested: i32,
        available: i32,
    },

    /// 주문을 찾을 수 없음
    /// Order not found
    #[error("Order not found: id={id}")]
    OrderNotFound { id: u64 },

    /// 허용되지 않는 상태 전이
    /// Status transition not allowed
    #[error("Cannot change order status from '{}' to '{}'", .from.as_str(), .to.as_str())]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::EmptyOrder
            | OrderError::Validation(_)
            | OrderError::TotalMismatch { .. } => StatusCode::BAD_REQUEST,
            OrderError::MenuNotFound { .. } | OrderError::OrderNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            OrderError::InsufficientStock { .. } | OrderError::InvalidTransition { .. } => {
                StatusCode::CONFLICT
            }
            OrderError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// OrderError를 HTTP 응답으로 변환
impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        error_response(err.status_code(), err.to_string())
    }
}
