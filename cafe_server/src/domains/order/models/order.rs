use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use chrono::{DateTime, Utc};
use crate::shared::errors::OrderError;
use super::status::OrderStatus;

// =====================================================
// Order 모델
// =====================================================
// 역할: 고객이 제출한 주문과 주문 상세 항목
//
// 요청/응답 JSON 키는 프론트엔드와 맞추기 위해 camelCase
// (totalAmount, createdAt, selectedOptions)
//
// 금액 단위: 원 (정수)
// price: 주문 시점의 단가 (옵션 금액 포함)
// =====================================================

/// 주문 항목 요청 (장바구니 한 줄)
/// One cart line of an order placement request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = OrderLineRequest)]
pub struct OrderLineRequest {
    /// 메뉴 ID
    #[schema(example = 1)]
    pub id: u64,

    /// 메뉴 이름 (표시용, 서버는 DB의 이름을 사용)
    #[schema(example = "아메리카노")]
    pub name: Option<String>,

    /// 수량 (1 이상)
    #[schema(example = 2)]
    pub quantity: i32,

    /// 단가 (옵션 포함)
    #[schema(example = 3500)]
    pub price: i64,

    /// 선택한 옵션 이름들
    #[serde(default)]
    pub selected_options: Vec<String>,
}

/// 주문 생성 요청
/// Order placement request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = PlaceOrderRequest)]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderLineRequest>,

    /// 총 결제 금액 (= Σ price × quantity)
    #[schema(example = 7000)]
    pub total_amount: i64,
}

/// 주문 생성 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = PlaceOrderResponse)]
pub struct PlaceOrderResponse {
    /// 새 주문 ID
    #[schema(example = 42)]
    pub id: u64,

    /// Success message
    /// 성공 메시지
    pub message: String,
}

/// 주문 상세 항목 (조회용)
/// Order item as returned by the admin order list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = OrderItem)]
pub struct OrderItem {
    /// 메뉴 ID
    pub id: u64,

    /// 메뉴 이름
    pub name: String,

    pub quantity: i32,

    /// 주문 시점 단가
    pub price: i64,

    /// 선택 옵션 ("샷 추가, 시럽 추가")
    pub selected_options: String,
}

/// 주문 정보 (항목 포함)
/// Order with its items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Order)]
pub struct Order {
    pub id: u64,

    pub total_amount: i64,

    pub status: OrderStatus,

    pub created_at: DateTime<Utc>,

    pub items: Vec<OrderItem>,
}

/// 주문 상태 변경 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateOrderStatusRequest)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// 주문 목록 조회 쿼리
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// 상태 필터 (예: "주문 접수" 또는 "received")
    #[param(value_type = Option<String>)]
    pub status: Option<OrderStatus>,
}

/// 대시보드 요약 (상태별 주문 수 + 매출)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = OrderSummary)]
pub struct OrderSummary {
    pub received: i64,
    pub preparing: i64,
    pub completed: i64,
    pub cancelled: i64,
    pub total_orders: i64,
    /// 제조 완료된 주문의 총 금액
    pub completed_revenue: i64,
}

impl OrderSummary {
    /// 상태별 집계 행으로부터 요약 생성
    pub fn from_counts(rows: impl IntoIterator<Item = (OrderStatus, i64, i64)>) -> Self {
        let mut summary = OrderSummary::default();
        for (status, count, amount) in rows {
            match status {
                OrderStatus::Received => summary.received += count,
                OrderStatus::Preparing => summary.preparing += count,
                OrderStatus::Completed => {
                    summary.completed += count;
                    summary.completed_revenue += amount;
                }
                OrderStatus::Cancelled => summary.cancelled += count,
            }
            summary.total_orders += count;
        }
        summary
    }
}

impl PlaceOrderRequest {
    /// DB 접근 전 요청 검증
    /// - 항목이 1개 이상
    /// - 수량 > 0, 단가 >= 0
    /// - totalAmount == Σ price × quantity
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let mut expected: i64 = 0;
        for line in &self.items {
            if line.quantity <= 0 {
                return Err(OrderError::Validation(format!(
                    "Quantity must be positive (menu id={}, quantity={})",
                    line.id, line.quantity
                )));
            }
            if line.price < 0 {
                return Err(OrderError::Validation(format!(
                    "Price must not be negative (menu id={}, price={})",
                    line.id, line.price
                )));
            }

            expected = line
                .price
                .checked_mul(i64::from(line.quantity))
                .and_then(|line_total| expected.checked_add(line_total))
                .ok_or_else(|| OrderError::Validation("Order total overflows".to_string()))?;
        }

        if expected != self.total_amount {
            return Err(OrderError::TotalMismatch {
                expected,
                actual: self.total_amount,
            });
        }

        Ok(())
    }

    /// 메뉴별 총 차감 수량 (메뉴 ID 오름차순)
    /// 같은 메뉴가 옵션만 달리해 여러 줄로 들어와도 한 번에 차감한다.
    /// 모든 주문이 같은 순서로 행 잠금을 잡으므로 교착 상태가 생기지 않는다.
    pub fn stock_demand(&self) -> Result<Vec<(u64, i32)>, OrderError> {
        let mut demand: BTreeMap<u64, i32> = BTreeMap::new();
        for line in &self.items {
            let total = demand.entry(line.id).or_insert(0);
            *total = total.checked_add(line.quantity).ok_or_else(|| {
                OrderError::Validation(format!("Quantity overflows for menu id={}", line.id))
            })?;
        }
        Ok(demand.into_iter().collect())
    }
}

/// 선택 옵션 목록을 저장용 문자열로 합침
pub fn join_selected_options(options: &[String]) -> String {
    options
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
