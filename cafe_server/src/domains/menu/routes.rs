use axum::{
    routing::{get, patch, post},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 공개 메뉴 라우터
/// - `GET /api/menu` - 메뉴 목록
pub fn create_menu_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_menus))
}

/// 메뉴 관리 라우터 (/api/admin/menu)
///
/// - `POST   /api/admin/menu` - 메뉴 생성
/// - `PATCH  /api/admin/menu/:id` - 메뉴 수정
/// - `DELETE /api/admin/menu/:id` - 메뉴 삭제
/// - `PATCH  /api/admin/menu/:id/stock` - 재고 수정
pub fn create_menu_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_menu))
        .route(
            "/:menu_id",
            patch(handlers::update_menu).delete(handlers::delete_menu),
        )
        .route("/:menu_id/stock", patch(handlers::update_stock))
}
