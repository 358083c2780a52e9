use std::collections::HashMap;
use sqlx::{PgConnection, PgPool, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use crate::domains::menu::models::{
    CreateMenuRequest, Menu, MenuOption, MenuOptionInput, UpdateMenuRequest, DEFAULT_CATEGORY,
};

/// 재고 조회 결과 (재고 부족 메시지용)
#[derive(Debug, Clone)]
pub struct StockSnapshot {
    pub name: String,
    pub stock: i32,
}

pub struct MenuRepository {
    pool: PgPool,
}

impl MenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 전체 메뉴 조회 (옵션 포함, id 순)
    /// Get all menus with their options
    pub async fn list_menus(&self) -> Result<Vec<Menu>> {
        let menu_rows = sqlx::query(
            r#"
            SELECT id, name, price, category, stock, image_url, description
            FROM menus
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch menus")?;

        let option_rows = sqlx::query(
            r#"
            SELECT id, menu_id, name, price
            FROM options
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch menu options")?;

        let mut options_by_menu: HashMap<u64, Vec<MenuOption>> = HashMap::new();
        for row in &option_rows {
            let menu_id = row.get::<i64, _>("menu_id") as u64;
            options_by_menu
                .entry(menu_id)
                .or_default()
                .push(row_to_option(row));
        }

        Ok(menu_rows
            .iter()
            .map(|row| {
                let mut menu = row_to_menu(row);
                menu.options = options_by_menu.remove(&menu.id).unwrap_or_default();
                menu
            })
            .collect())
    }

    /// 메뉴 ID로 조회 (옵션 포함)
    /// Get menu by ID
    pub async fn get_by_id(&self, menu_id: u64) -> Result<Option<Menu>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, category, stock, image_url, description
            FROM menus
            WHERE id = $1
            "#,
        )
        .bind(menu_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch menu by id")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let option_rows = sqlx::query(
            r#"
            SELECT id, menu_id, name, price
            FROM options
            WHERE menu_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(menu_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch options for menu")?;

        let mut menu = row_to_menu(&row);
        menu.options = option_rows.iter().map(row_to_option).collect();
        Ok(Some(menu))
    }

    /// 재고 직접 설정 (관리자). 메뉴가 없으면 false
    /// Overwrite the stock count of a menu
    pub async fn set_stock(&self, menu_id: u64, stock: i32) -> Result<bool> {
        let result = sqlx::query("UPDATE menus SET stock = $1 WHERE id = $2")
            .bind(stock)
            .bind(menu_id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to update stock")?;

        Ok(result.rows_affected() > 0)
    }

    /// 주문 이력 존재 여부
    pub async fn has_order_history(&self, menu_id: u64) -> Result<bool> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire connection")?;

        Self::order_history_exists(&mut *conn, menu_id).await
    }

    // =====================================================
    // 트랜잭션 내부에서 호출되는 함수들
    // =====================================================
    // 호출하는 Service가 트랜잭션(begin/commit)을 소유하고
    // 여기서는 전달받은 커넥션 위에서만 쿼리를 실행한다.
    // =====================================================

    /// 메뉴 생성, 새 메뉴 ID 반환
    pub async fn insert_menu(conn: &mut PgConnection, request: &CreateMenuRequest) -> Result<u64> {
        let row = sqlx::query(
            r#"
            INSERT INTO menus (name, price, category, stock, image_url, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(request.name.trim())
        .bind(request.price)
        .bind(request.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
        .bind(request.stock.unwrap_or(0))
        .bind(&request.image_url)
        .bind(&request.description)
        .fetch_one(&mut *conn)
        .await
        .context("Failed to insert menu")?;

        Ok(row.get::<i64, _>("id") as u64)
    }

    /// 메뉴 부분 수정 (None 필드는 유지). 메뉴가 없으면 false
    /// image_url / description 은 Some(None)이면 NULL로 지운다
    pub async fn update_menu(
        conn: &mut PgConnection,
        menu_id: u64,
        request: &UpdateMenuRequest,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE menus
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                category = COALESCE($4, category),
                stock = COALESCE($5, stock),
                image_url = CASE WHEN $8 THEN $6 ELSE image_url END,
                description = CASE WHEN $9 THEN $7 ELSE description END
            WHERE id = $1
            "#,
        )
        .bind(menu_id as i64)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.price)
        .bind(&request.category)
        .bind(request.stock)
        .bind(request.image_url.clone().flatten())
        .bind(request.description.clone().flatten())
        .bind(request.image_url.is_some())
        .bind(request.description.is_some())
        .execute(&mut *conn)
        .await
        .context("Failed to update menu")?;

        Ok(result.rows_affected() > 0)
    }

    /// 메뉴의 옵션 전체 교체
    pub async fn replace_options(
        conn: &mut PgConnection,
        menu_id: u64,
        options: &[MenuOptionInput],
    ) -> Result<()> {
        sqlx::query("DELETE FROM options WHERE menu_id = $1")
            .bind(menu_id as i64)
            .execute(&mut *conn)
            .await
            .context("Failed to delete menu options")?;

        for option in options {
            sqlx::query("INSERT INTO options (menu_id, name, price) VALUES ($1, $2, $3)")
                .bind(menu_id as i64)
                .bind(option.name.trim())
                .bind(option.price)
                .execute(&mut *conn)
                .await
                .context("Failed to insert menu option")?;
        }

        Ok(())
    }

    /// 메뉴 행 잠금 (SELECT ... FOR UPDATE). 메뉴가 없으면 false
    /// 주문 생성의 재고 차감도 같은 행을 잠그므로 삭제와 주문이 직렬화된다.
    pub async fn lock_menu(conn: &mut PgConnection, menu_id: u64) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM menus WHERE id = $1 FOR UPDATE")
            .bind(menu_id as i64)
            .fetch_optional(&mut *conn)
            .await
            .context("Failed to lock menu")?;

        Ok(row.is_some())
    }

    /// 주문 이력 존재 여부 (삭제 가능 여부 판단)
    pub async fn order_history_exists(conn: &mut PgConnection, menu_id: u64) -> Result<bool> {
        let row = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM order_items WHERE menu_id = $1) AS referenced",
        )
        .bind(menu_id as i64)
        .fetch_one(&mut *conn)
        .await
        .context("Failed to check order history")?;

        Ok(row.get::<bool, _>("referenced"))
    }

    /// 메뉴 삭제 (옵션은 CASCADE). 메뉴가 없으면 false
    pub async fn delete_menu(conn: &mut PgConnection, menu_id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(menu_id as i64)
            .execute(&mut *conn)
            .await
            .context("Failed to delete menu")?;

        Ok(result.rows_affected() > 0)
    }

    /// 조건부 재고 차감
    /// 재고가 주문 수량 이상일 때만 차감하므로 재고는 절대 음수가 되지 않는다.
    /// 차감되었으면 Some(남은 재고), 메뉴가 없거나 재고가 부족하면 None
    pub async fn try_decrement_stock(
        conn: &mut PgConnection,
        menu_id: u64,
        quantity: i32,
    ) -> Result<Option<i32>> {
        let row = sqlx::query(
            r#"
            UPDATE menus
            SET stock = stock - $1
            WHERE id = $2 AND stock >= $1
            RETURNING stock
            "#,
        )
        .bind(quantity)
        .bind(menu_id as i64)
        .fetch_optional(&mut *conn)
        .await
        .context("Failed to decrement stock")?;

        Ok(row.map(|r| r.get::<i32, _>("stock")))
    }

    /// 재고 복구 (주문 취소 시)
    pub async fn restock(conn: &mut PgConnection, menu_id: u64, quantity: i32) -> Result<()> {
        sqlx::query("UPDATE menus SET stock = stock + $1 WHERE id = $2")
            .bind(quantity)
            .bind(menu_id as i64)
            .execute(&mut *conn)
            .await
            .context("Failed to restock menu")?;

        Ok(())
    }

    /// 현재 재고 조회 (차감 실패 원인 판별용)
    pub async fn stock_snapshot(
        conn: &mut PgConnection,
        menu_id: u64,
    ) -> Result<Option<StockSnapshot>> {
        let row = sqlx::query("SELECT name, stock FROM menus WHERE id = $1")
            .bind(menu_id as i64)
            .fetch_optional(&mut *conn)
            .await
            .context("Failed to fetch stock")?;

        Ok(row.map(|r| StockSnapshot {
            name: r.get("name"),
            stock: r.get("stock"),
        }))
    }
}

fn row_to_menu(row: &PgRow) -> Menu {
    Menu {
        id: row.get::<i64, _>("id") as u64,
        name: row.get("name"),
        price: row.get("price"),
        category: row.get("category"),
        stock: row.get("stock"),
        image_url: row.get("image_url"),
        description: row.get("description"),
        options: Vec::new(),
    }
}

fn row_to_option(row: &PgRow) -> MenuOption {
    MenuOption {
        id: row.get::<i64, _>("id") as u64,
        menu_id: row.get::<i64, _>("menu_id") as u64,
        name: row.get("name"),
        price: row.get("price"),
    }
}
