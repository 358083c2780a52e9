use crate::domains::auth::models::Permission;
use crate::domains::order::models::{
    Order, OrderListQuery, OrderSummary, PlaceOrderRequest, PlaceOrderResponse,
    UpdateOrderStatusRequest,
};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::middleware::extractors::{Json, Path, Query};
use axum::{extract::State, http::StatusCode};

// =====================================================
// Order Handler
// =====================================================
// 역할: 주문 관련 HTTP API 엔드포인트
//
// 처리 흐름:
// HTTP Request → Handler → Service → Repository (트랜잭션) → Response
// =====================================================

/// 주문 생성 핸들러
/// Place order handler
///
/// 장바구니 내용을 주문으로 저장하고 재고를 차감합니다.
/// 재고가 부족한 항목이 하나라도 있으면 주문 전체가 취소됩니다.
///
/// # Request Body
/// - items: [{ id, name, quantity, price, selectedOptions }]
/// - totalAmount: Σ price × quantity
///
/// # Response
/// - 201: 주문 생성 성공
/// - 400: 잘못된 요청 (빈 주문, 수량/금액 오류)
/// - 404: 존재하지 않는 메뉴
/// - 409: 재고 부족 (부족한 메뉴 이름 포함)
/// - 500: 서버 오류
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Invalid order"),
        (status = 404, description = "Menu not found"),
        (status = 409, description = "Insufficient stock"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(app_state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<PlaceOrderResponse>), ApiError> {
    let order_id = app_state.order_state.order_service.place_order(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            id: order_id,
            message: "Order placed successfully".to_string(),
        }),
    ))
}

/// 주문 목록 조회 핸들러 (최신순)
/// List orders handler
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Order list", body = Vec<Order>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Order Admin"
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Vec<Order>>, ApiError> {
    user.require(Permission::ViewOrders)?;

    let orders = app_state
        .order_state
        .order_service
        .list_orders(query.status)
        .await?;

    Ok(Json(orders))
}

/// 주문 요약 핸들러 (상태별 건수, 매출)
#[utoipa::path(
    get,
    path = "/api/admin/orders/summary",
    responses(
        (status = 200, description = "Order summary", body = OrderSummary),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Order Admin"
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<OrderSummary>, ApiError> {
    user.require(Permission::ViewOrders)?;

    let summary = app_state.order_state.order_service.summary().await?;
    Ok(Json(summary))
}

/// 특정 주문 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/orders/{order_id}",
    params(
        ("order_id" = u64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Order Admin"
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(order_id): Path<u64>,
) -> Result<Json<Order>, ApiError> {
    user.require(Permission::ViewOrders)?;

    let order = app_state.order_state.order_service.get_order(order_id).await?;
    Ok(Json(order))
}

/// 주문 상태 변경 핸들러
/// Update order status handler
///
/// 주문 접수 → 제조 중 → 제조 완료, 또는 주문 접수 → 취소됨
/// 취소 시 주문 수량만큼 재고가 복구됩니다 (같은 트랜잭션).
#[utoipa::path(
    patch,
    path = "/api/admin/orders/{order_id}",
    params(
        ("order_id" = u64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Order),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Transition not allowed"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Order Admin"
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(order_id): Path<u64>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    user.require(Permission::UpdateOrderStatus)?;

    let order = app_state
        .order_state
        .order_service
        .update_status(order_id, request.status)
        .await?;

    Ok(Json(order))
}
