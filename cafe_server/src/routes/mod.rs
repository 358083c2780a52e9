// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

pub mod health;

use axum::{routing::get, Router};
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::menu::routes::{create_menu_admin_router, create_menu_router};
use crate::domains::order::routes::{create_order_admin_router, create_order_router};
use crate::domains::users::routes::{create_roles_router, create_users_router};

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest("/api/auth", create_auth_router())
        .nest("/api/menu", create_menu_router())
        .nest("/api/orders", create_order_router())
        .nest("/api/admin/orders", create_order_admin_router())
        .nest("/api/admin/menu", create_menu_admin_router())
        .nest("/api/admin/users", create_users_router())
        .nest("/api/admin/roles", create_roles_router())
}
