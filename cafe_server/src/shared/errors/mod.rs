// Shared errors
pub mod auth_error;
pub mod menu_error;
pub mod order_error;

pub use auth_error::*;
pub use menu_error::*;
pub use order_error::*;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// 핸들러 공통 에러 응답 타입
/// Error response shared by every handler: `{ "message": "..." }`
pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// 상태 코드와 메시지로 에러 응답 생성
/// 5xx 에러는 여기서 로그를 남긴다
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    let message = message.into();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), "{message}");
    }
    (status, Json(json!({ "message": message })))
}
