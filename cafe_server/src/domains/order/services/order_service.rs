use crate::shared::database::{Database, MenuRepository, OrderRepository};
use crate::shared::errors::OrderError;
use crate::domains::order::models::{
    join_selected_options, Order, OrderStatus, OrderSummary, PlaceOrderRequest,
};
use tracing::{info, warn};

// =====================================================
// Order Service
// =====================================================
// 역할: 주문 생성 / 상태 변경 트랜잭션
//
// 주문 생성:
//   BEGIN
//   1. orders INSERT (주문 접수)
//   2. 메뉴별 조건부 재고 차감 (메뉴 ID 오름차순)
//      UPDATE menus SET stock = stock - q WHERE id = ? AND stock >= q
//      → 0행이면 메뉴 없음(404) 또는 재고 부족(409), 전체 롤백
//   3. order_items INSERT (요청 순서대로)
//   COMMIT
//
// 상태 변경:
//   BEGIN
//   1. SELECT status ... FOR UPDATE (행 잠금)
//   2. 전이 검증
//   3. orders.status UPDATE
//   4. 취소면 주문 항목 수량만큼 재고 복구
//   COMMIT
//
// 트랜잭션은 commit 없이 drop되면 자동으로 롤백된다.
// =====================================================

#[derive(Clone)]
pub struct OrderService {
    db: Database,
}

fn db_error(context: &str, e: impl std::fmt::Display) -> OrderError {
    OrderError::DatabaseError(format!("{}: {:#}", context, e))
}

impl OrderService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 주문 생성 (원자적)
    /// Place an order atomically, returning the new order id
    pub async fn place_order(&self, request: PlaceOrderRequest) -> Result<u64, OrderError> {
        // 1. DB 접근 전 검증
        request.validate()?;
        let demand = request.stock_demand()?;

        // 2. 트랜잭션 시작
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // 3. 주문 메인 정보 저장
        let order_id = OrderRepository::insert_order(&mut *tx, request.total_amount)
            .await
            .map_err(|e| db_error("Failed to create order", e))?;

        // 4. 재고 차감 (하나라도 실패하면 tx drop → 롤백)
        for (menu_id, quantity) in demand {
            let remaining = MenuRepository::try_decrement_stock(&mut *tx, menu_id, quantity)
                .await
                .map_err(|e| db_error("Failed to decrement stock", e))?;

            if remaining.is_none() {
                let snapshot = MenuRepository::stock_snapshot(&mut *tx, menu_id)
                    .await
                    .map_err(|e| db_error("Failed to read stock", e))?;

                let err = match snapshot {
                    None => OrderError::MenuNotFound { menu_id },
                    Some(snapshot) => OrderError::InsufficientStock {
                        menu_id,
                        name: snapshot.name,
                        requested: quantity,
                        available: snapshot.stock,
                    },
                };
                warn!(menu_id, quantity, "Order rejected: {}", err);
                return Err(err);
            }
        }

        // 5. 주문 상세 항목 저장
        for line in &request.items {
            let options_text = join_selected_options(&line.selected_options);
            OrderRepository::insert_item(
                &mut *tx,
                order_id,
                line.id,
                line.quantity,
                line.price,
                &options_text,
            )
            .await
            .map_err(|e| db_error("Failed to create order item", e))?;
        }

        // 6. 커밋
        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit order", e))?;

        info!(
            order_id,
            items = request.items.len(),
            total_amount = request.total_amount,
            "Order placed"
        );
        Ok(order_id)
    }

    /// 주문 상태 변경 (취소 시 재고 복구 포함)
    /// Transition an order's status; cancelling restores stock in the same transaction
    pub async fn update_status(
        &self,
        order_id: u64,
        next: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // 1. 행 잠금 + 현재 상태
        let current = OrderRepository::lock_status(&mut *tx, order_id)
            .await
            .map_err(|e| db_error("Failed to lock order", e))?
            .ok_or(OrderError::OrderNotFound { id: order_id })?;

        // 2. 전이 검증
        if !current.can_transition_to(next) {
            if current.is_terminal() {
                // 이미 끝난 주문 (중복 취소 등)
                warn!(order_id, status = %current, requested = %next, "Order is already closed");
            }
            return Err(OrderError::InvalidTransition { from: current, to: next });
        }

        // 3. 상태 변경
        OrderRepository::set_status(&mut *tx, order_id, next)
            .await
            .map_err(|e| db_error("Failed to update order status", e))?;

        // 4. 취소 → 재고 복구
        if next == OrderStatus::Cancelled {
            let quantities = OrderRepository::item_quantities(&mut *tx, order_id)
                .await
                .map_err(|e| db_error("Failed to fetch order items", e))?;

            for (menu_id, quantity) in quantities {
                MenuRepository::restock(&mut *tx, menu_id, quantity)
                    .await
                    .map_err(|e| db_error("Failed to restore stock", e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit status update", e))?;

        info!(order_id, from = %current, to = %next, "Order status updated");

        self.get_order(order_id).await
    }

    /// 주문 목록 (최신순)
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, OrderError> {
        OrderRepository::new(self.db.pool().clone())
            .list_orders(status)
            .await
            .map_err(|e| db_error("Failed to fetch orders", e))
    }

    pub async fn get_order(&self, order_id: u64) -> Result<Order, OrderError> {
        OrderRepository::new(self.db.pool().clone())
            .get_by_id(order_id)
            .await
            .map_err(|e| db_error("Failed to fetch order", e))?
            .ok_or(OrderError::OrderNotFound { id: order_id })
    }

    /// 대시보드 요약
    pub async fn summary(&self) -> Result<OrderSummary, OrderError> {
        let totals = OrderRepository::new(self.db.pool().clone())
            .status_totals()
            .await
            .map_err(|e| db_error("Failed to aggregate orders", e))?;

        Ok(OrderSummary::from_counts(totals))
    }
}
