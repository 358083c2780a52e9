use crate::shared::database::{is_foreign_key_violation, Database, MenuRepository};
use crate::shared::errors::MenuError;
use crate::domains::menu::models::{
    validate_stock, CreateMenuRequest, Menu, UpdateMenuRequest,
};
use tracing::info;

// 메뉴 서비스
// MenuService: menu listing, CRUD and stock overrides
#[derive(Clone)]
pub struct MenuService {
    db: Database,
}

fn db_error(context: &str, e: impl std::fmt::Display) -> MenuError {
    MenuError::DatabaseError(format!("{}: {:#}", context, e))
}

impl MenuService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn repo(&self) -> MenuRepository {
        MenuRepository::new(self.db.pool().clone())
    }

    /// 전체 메뉴 (옵션 포함)
    pub async fn list_menus(&self) -> Result<Vec<Menu>, MenuError> {
        self.repo()
            .list_menus()
            .await
            .map_err(|e| db_error("Failed to fetch menus", e))
    }

    pub async fn get_menu(&self, menu_id: u64) -> Result<Menu, MenuError> {
        self.repo()
            .get_by_id(menu_id)
            .await
            .map_err(|e| db_error("Failed to fetch menu", e))?
            .ok_or(MenuError::NotFound { id: menu_id })
    }

    /// 재고 직접 수정 (관리자)
    pub async fn update_stock(&self, menu_id: u64, stock: i32) -> Result<Menu, MenuError> {
        validate_stock(stock).map_err(MenuError::Validation)?;

        let updated = self
            .repo()
            .set_stock(menu_id, stock)
            .await
            .map_err(|e| db_error("Failed to update stock", e))?;
        if !updated {
            return Err(MenuError::NotFound { id: menu_id });
        }

        info!(menu_id, stock, "Stock overridden");
        self.get_menu(menu_id).await
    }

    /// 메뉴 생성 (메뉴 + 옵션을 한 트랜잭션으로)
    pub async fn create_menu(&self, request: CreateMenuRequest) -> Result<Menu, MenuError> {
        request.validate().map_err(MenuError::Validation)?;

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let menu_id = MenuRepository::insert_menu(&mut *tx, &request)
            .await
            .map_err(|e| db_error("Failed to create menu", e))?;

        MenuRepository::replace_options(&mut *tx, menu_id, &request.options)
            .await
            .map_err(|e| db_error("Failed to create menu options", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit menu", e))?;

        info!(menu_id, name = %request.name, "Menu created");
        self.get_menu(menu_id).await
    }

    /// 메뉴 부분 수정 (options가 있으면 전체 교체)
    pub async fn update_menu(
        &self,
        menu_id: u64,
        request: UpdateMenuRequest,
    ) -> Result<Menu, MenuError> {
        request.validate().map_err(MenuError::Validation)?;

        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let updated = MenuRepository::update_menu(&mut *tx, menu_id, &request)
            .await
            .map_err(|e| db_error("Failed to update menu", e))?;
        if !updated {
            return Err(MenuError::NotFound { id: menu_id });
        }

        if let Some(options) = &request.options {
            MenuRepository::replace_options(&mut *tx, menu_id, options)
                .await
                .map_err(|e| db_error("Failed to replace menu options", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit menu update", e))?;

        info!(menu_id, "Menu updated");
        self.get_menu(menu_id).await
    }

    /// 메뉴 삭제 (주문 이력이 있으면 거부)
    ///
    /// 메뉴 행을 잠근 뒤 이력 확인 + 삭제를 한 트랜잭션에서 처리한다.
    /// 먼저 커밋된 주문은 이력으로 보이고, 뒤에 온 주문은 메뉴 없음(404)이 된다.
    pub async fn delete_menu(&self, menu_id: u64) -> Result<(), MenuError> {
        let mut tx = self
            .db
            .pool()
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        // 1. 행 잠금
        let exists = MenuRepository::lock_menu(&mut *tx, menu_id)
            .await
            .map_err(|e| db_error("Failed to lock menu", e))?;
        if !exists {
            return Err(MenuError::NotFound { id: menu_id });
        }

        // 2. 주문 이력 확인
        let referenced = MenuRepository::order_history_exists(&mut *tx, menu_id)
            .await
            .map_err(|e| db_error("Failed to check order history", e))?;
        if referenced {
            return Err(MenuError::HasOrderHistory { id: menu_id });
        }

        // 3. 삭제 (FK 위반은 이력 있음으로 취급)
        let deleted = MenuRepository::delete_menu(&mut *tx, menu_id)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    MenuError::HasOrderHistory { id: menu_id }
                } else {
                    db_error("Failed to delete menu", e)
                }
            })?;
        if !deleted {
            return Err(MenuError::NotFound { id: menu_id });
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit menu deletion", e))?;

        info!(menu_id, "Menu deleted");
        Ok(())
    }
}
