use crate::domains::auth::models::Permission;
use crate::domains::menu::models::{
    CreateMenuRequest, Menu, UpdateMenuRequest, UpdateStockRequest,
};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::middleware::extractors::{Json, Path};
use axum::{extract::State, http::StatusCode};

// =====================================================
// Menu Handler
// =====================================================
// 역할: 메뉴 조회 (공개) + 메뉴 관리 (Manager 이상)
//
// 처리 흐름:
// HTTP Request → Handler → Service → Repository → Response
// =====================================================

/// 메뉴 목록 조회 (옵션 포함)
/// List all menus with options
#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu list", body = Vec<Menu>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Menu"
)]
pub async fn list_menus(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Menu>>, ApiError> {
    let menus = app_state.menu_state.menu_service.list_menus().await?;
    Ok(Json(menus))
}

/// 재고 직접 수정
/// Overwrite stock of a menu item
///
/// # Authentication
/// Manager 이상
#[utoipa::path(
    patch,
    path = "/api/admin/menu/{menu_id}/stock",
    params(
        ("menu_id" = u64, Path, description = "Menu ID")
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock updated", body = Menu),
        (status = 400, description = "Negative stock"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Menu not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Menu Admin"
)]
pub async fn update_stock(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(menu_id): Path<u64>,
    Json(request): Json<UpdateStockRequest>,
) -> Result<Json<Menu>, ApiError> {
    user.require(Permission::ManageInventory)?;

    let menu = app_state
        .menu_state
        .menu_service
        .update_stock(menu_id, request.stock)
        .await?;

    Ok(Json(menu))
}

/// 메뉴 생성
/// Create a menu item with options
#[utoipa::path(
    post,
    path = "/api/admin/menu",
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created", body = Menu),
        (status = 400, description = "Invalid menu"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Menu Admin"
)]
pub async fn create_menu(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateMenuRequest>,
) -> Result<(StatusCode, Json<Menu>), ApiError> {
    user.require(Permission::ManageMenu)?;

    let menu = app_state.menu_state.menu_service.create_menu(request).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

/// 메뉴 수정
/// Partially update a menu item (options are replaced when present)
#[utoipa::path(
    patch,
    path = "/api/admin/menu/{menu_id}",
    params(
        ("menu_id" = u64, Path, description = "Menu ID")
    ),
    request_body = UpdateMenuRequest,
    responses(
        (status = 200, description = "Menu updated", body = Menu),
        (status = 400, description = "Invalid menu"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Menu not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Menu Admin"
)]
pub async fn update_menu(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(menu_id): Path<u64>,
    Json(request): Json<UpdateMenuRequest>,
) -> Result<Json<Menu>, ApiError> {
    user.require(Permission::ManageMenu)?;

    let menu = app_state
        .menu_state
        .menu_service
        .update_menu(menu_id, request)
        .await?;

    Ok(Json(menu))
}

/// 메뉴 삭제
/// Delete a menu item (refused when orders reference it)
#[utoipa::path(
    delete,
    path = "/api/admin/menu/{menu_id}",
    params(
        ("menu_id" = u64, Path, description = "Menu ID")
    ),
    responses(
        (status = 200, description = "Menu deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Menu not found"),
        (status = 409, description = "Menu has order history"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Menu Admin"
)]
pub async fn delete_menu(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(menu_id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    user.require(Permission::ManageMenu)?;

    app_state.menu_state.menu_service.delete_menu(menu_id).await?;

    Ok(Json(serde_json::json!({
        "id": menu_id,
        "message": "Menu deleted"
    })))
}
