use std::collections::HashMap;
use sqlx::{PgConnection, PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{anyhow, Context, Result};
use crate::domains::order::models::{Order, OrderItem, OrderStatus};

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 주문 목록 조회 (최신순, 항목 포함)
    /// Get all orders (newest first) with their items
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, total_amount, status, created_at
            FROM orders
            WHERE $1::TEXT IS NULL OR status = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(status.map(OrderStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch orders")?;

        let mut orders = rows.iter().map(row_to_order).collect::<Result<Vec<_>>>()?;
        if orders.is_empty() {
            return Ok(orders);
        }

        let order_ids: Vec<i64> = orders.iter().map(|o| o.id as i64).collect();
        let mut items_by_order = self.fetch_items(&order_ids).await?;
        for order in &mut orders {
            order.items = items_by_order.remove(&order.id).unwrap_or_default();
        }

        Ok(orders)
    }

    /// 주문 ID로 조회 (항목 포함)
    /// Get order by ID
    pub async fn get_by_id(&self, order_id: u64) -> Result<Option<Order>> {
        let row = sqlx::query(
            r#"
            SELECT id, total_amount, status, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch order by id")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut order = row_to_order(&row)?;
        order.items = self
            .fetch_items(&[order_id as i64])
            .await?
            .remove(&order_id)
            .unwrap_or_default();

        Ok(Some(order))
    }

    /// 상태별 주문 수와 금액 합계
    pub async fn status_totals(&self) -> Result<Vec<(OrderStatus, i64, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT status, COUNT(*) AS order_count, COALESCE(SUM(total_amount), 0)::BIGINT AS amount
            FROM orders
            GROUP BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to aggregate orders by status")?;

        rows.iter()
            .map(|row| {
                let status = parse_status(row)?;
                Ok((status, row.get::<i64, _>("order_count"), row.get::<i64, _>("amount")))
            })
            .collect()
    }

    async fn fetch_items(&self, order_ids: &[i64]) -> Result<HashMap<u64, Vec<OrderItem>>> {
        let rows = sqlx::query(
            r#"
            SELECT oi.order_id, oi.menu_id, m.name, oi.quantity, oi.price, oi.selected_options
            FROM order_items oi
            JOIN menus m ON m.id = oi.menu_id
            WHERE oi.order_id = ANY($1)
            ORDER BY oi.id ASC
            "#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch order items")?;

        let mut items: HashMap<u64, Vec<OrderItem>> = HashMap::new();
        for row in &rows {
            let order_id = row.get::<i64, _>("order_id") as u64;
            items.entry(order_id).or_default().push(OrderItem {
                id: row.get::<i64, _>("menu_id") as u64,
                name: row.get("name"),
                quantity: row.get("quantity"),
                price: row.get("price"),
                selected_options: row.get("selected_options"),
            });
        }
        Ok(items)
    }

    // =====================================================
    // 트랜잭션 내부에서 호출되는 함수들
    // =====================================================

    /// 주문 생성 ("주문 접수" 상태), 새 주문 ID 반환
    pub async fn insert_order(conn: &mut PgConnection, total_amount: i64) -> Result<u64> {
        let row = sqlx::query(
            r#"
            INSERT INTO orders (total_amount, status)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(total_amount)
        .bind(OrderStatus::Received.as_str())
        .fetch_one(&mut *conn)
        .await
        .context("Failed to insert order")?;

        Ok(row.get::<i64, _>("id") as u64)
    }

    /// 주문 상세 항목 저장
    pub async fn insert_item(
        conn: &mut PgConnection,
        order_id: u64,
        menu_id: u64,
        quantity: i32,
        price: i64,
        selected_options: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, menu_id, quantity, price, selected_options)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order_id as i64)
        .bind(menu_id as i64)
        .bind(quantity)
        .bind(price)
        .bind(selected_options)
        .execute(&mut *conn)
        .await
        .context("Failed to insert order item")?;

        Ok(())
    }

    /// 주문 행을 잠그고 현재 상태 조회 (SELECT ... FOR UPDATE)
    /// 같은 주문에 대한 동시 상태 변경은 여기서 직렬화된다.
    pub async fn lock_status(conn: &mut PgConnection, order_id: u64) -> Result<Option<OrderStatus>> {
        let row = sqlx::query("SELECT status FROM orders WHERE id = $1 FOR UPDATE")
            .bind(order_id as i64)
            .fetch_optional(&mut *conn)
            .await
            .context("Failed to lock order")?;

        row.as_ref().map(parse_status).transpose()
    }

    pub async fn set_status(conn: &mut PgConnection, order_id: u64, status: OrderStatus) -> Result<()> {
        sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(order_id as i64)
            .execute(&mut *conn)
            .await
            .context("Failed to update order status")?;

        Ok(())
    }

    /// 주문에 포함된 (메뉴 ID, 수량) 목록 (재고 복구용)
    pub async fn item_quantities(conn: &mut PgConnection, order_id: u64) -> Result<Vec<(u64, i32)>> {
        let rows = sqlx::query(
            r#"
            SELECT menu_id, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY menu_id ASC
            "#,
        )
        .bind(order_id as i64)
        .fetch_all(&mut *conn)
        .await
        .context("Failed to fetch order item quantities")?;

        Ok(rows
            .iter()
            .map(|r| (r.get::<i64, _>("menu_id") as u64, r.get::<i32, _>("quantity")))
            .collect())
    }
}

fn parse_status(row: &PgRow) -> Result<OrderStatus> {
    let raw: String = row.get("status");
    OrderStatus::parse(&raw).ok_or_else(|| anyhow!("Unknown order status in database: {}", raw))
}

fn row_to_order(row: &PgRow) -> Result<Order> {
    Ok(Order {
        id: row.get::<i64, _>("id") as u64,
        total_amount: row.get("total_amount"),
        status: parse_status(row)?,
        created_at: row.get("created_at"),
        items: Vec::new(),
    })
}
