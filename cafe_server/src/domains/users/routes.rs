// Users domain routes
use axum::{
    routing::{get, patch},
    Router,
};
use crate::shared::services::AppState;

use super::handlers;

/// 사용자 관리 라우터 (/api/admin/users)
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:user_id",
            patch(handlers::update_user).delete(handlers::delete_user),
        )
}

/// 역할 목록 라우터 (/api/admin/roles)
pub fn create_roles_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_roles))
}
