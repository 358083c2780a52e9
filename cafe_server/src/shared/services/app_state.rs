use crate::shared::config::AppConfig;
use crate::shared::database::Database;
use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::menu::services::MenuState;
use crate::domains::order::services::OrderState;
use crate::domains::users::services::UsersState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 (공유)
    /// Database connection (shared)
    pub db: Database,
    pub auth_state: AuthState,
    pub users_state: UsersState,
    pub menu_state: MenuState,
    pub order_state: OrderState,
}

impl AppState {
    /// Create AppState with database and configuration
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(db: Database, config: &AppConfig) -> Self {
        // 1. 공유 서비스 생성 (JWT)
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        // 2. 각 도메인 State 생성 + 조합
        Self {
            auth_state: AuthState::new(db.clone(), jwt_service),
            users_state: UsersState::new(db.clone()),
            menu_state: MenuState::new(db.clone()),
            order_state: OrderState::new(db.clone()),
            db,
        }
    }
}
