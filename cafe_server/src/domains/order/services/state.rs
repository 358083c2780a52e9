// Order domain state
// 주문 도메인 상태
use crate::shared::database::Database;
use crate::domains::order::services::OrderService;

#[derive(Clone)]
pub struct OrderState {
    pub order_service: OrderService,
}

impl OrderState {
    pub fn new(db: Database) -> Self {
        Self {
            order_service: OrderService::new(db),
        }
    }
}
