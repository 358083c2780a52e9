use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// Role / Permission
// =====================================================
// 역할은 권한 범위 순으로 정렬된다: Admin > Manager > Staff
// 각 엔드포인트는 문자열 비교 대신 Permission 하나를 요구하고,
// 역할이 그 Permission의 최소 역할 이상이면 통과한다.
// =====================================================

/// 사용자 역할 (roles 테이블의 id와 1:1 대응)
/// User role (matches the seeded rows of the `roles` table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Staff];

    /// roles 테이블의 id
    pub fn id(self) -> i32 {
        match self {
            Role::Admin => 1,
            Role::Manager => 2,
            Role::Staff => 3,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    fn rank(self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Manager => 2,
            Role::Staff => 1,
        }
    }

    /// 이 역할이 해당 권한을 가지는지
    pub fn has(self, permission: Permission) -> bool {
        self.rank() >= permission.minimum_role().rank()
    }
}

/// 엔드포인트별 권한
/// Permission required by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// 주문 목록 / 요약 / 상세 조회
    ViewOrders,
    /// 주문 상태 변경 (취소 포함)
    UpdateOrderStatus,
    /// 재고 직접 수정
    ManageInventory,
    /// 메뉴 생성 / 수정 / 삭제
    ManageMenu,
    /// 사용자 / 역할 관리
    ManageUsers,
}

impl Permission {
    pub fn minimum_role(self) -> Role {
        match self {
            Permission::ViewOrders | Permission::UpdateOrderStatus => Role::Staff,
            Permission::ManageInventory | Permission::ManageMenu => Role::Manager,
            Permission::ManageUsers => Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_name("Owner"), None);
    }

    #[test]
    fn staff_only_handles_the_order_pipeline() {
        assert!(Role::Staff.has(Permission::ViewOrders));
        assert!(Role::Staff.has(Permission::UpdateOrderStatus));
        assert!(!Role::Staff.has(Permission::ManageInventory));
        assert!(!Role::Staff.has(Permission::ManageMenu));
        assert!(!Role::Staff.has(Permission::ManageUsers));
    }

    #[test]
    fn manager_cannot_manage_users() {
        assert!(Role::Manager.has(Permission::ManageInventory));
        assert!(Role::Manager.has(Permission::ManageMenu));
        assert!(!Role::Manager.has(Permission::ManageUsers));
    }

    #[test]
    fn admin_has_every_permission() {
        for permission in [
            Permission::ViewOrders,
            Permission::UpdateOrderStatus,
            Permission::ManageInventory,
            Permission::ManageMenu,
            Permission::ManageUsers,
        ] {
            assert!(Role::Admin.has(permission), "{permission:?}");
        }
    }
}
