// Users domain state
// 사용자 관리 도메인 상태
use crate::shared::database::Database;
use crate::domains::users::services::UserService;

#[derive(Clone)]
pub struct UsersState {
    pub user_service: UserService,
}

impl UsersState {
    pub fn new(db: Database) -> Self {
        Self {
            user_service: UserService::new(db),
        }
    }
}
