// Menu domain state
// 메뉴 도메인 상태
use crate::shared::database::Database;
use crate::domains::menu::services::MenuService;

#[derive(Clone)]
pub struct MenuState {
    pub menu_service: MenuService,
}

impl MenuState {
    pub fn new(db: Database) -> Self {
        Self {
            menu_service: MenuService::new(db),
        }
    }
}
