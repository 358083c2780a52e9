use axum::{
    routing::{get, post},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 주문 생성 라우터 (공개)
/// - `POST /api/orders` - 주문 생성
pub fn create_order_router() -> Router<AppState> {
    Router::new().route("/", post(handlers::place_order))
}

/// 주문 관리 라우터 (/api/admin/orders)
///
/// - `GET   /api/admin/orders` - 주문 목록 (?status=)
/// - `GET   /api/admin/orders/summary` - 상태별 요약
/// - `GET   /api/admin/orders/:id` - 주문 조회
/// - `PATCH /api/admin/orders/:id` - 상태 변경 (취소 시 재고 복구)
pub fn create_order_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders))
        // 주의: /summary는 /:order_id보다 구체적인 경로로 우선 매칭됨
        .route("/summary", get(handlers::get_summary))
        .route(
            "/:order_id",
            get(handlers::get_order).patch(handlers::update_order_status),
        )
}
