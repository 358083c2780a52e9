use serde::{Deserialize, Serialize};
use super::role::Role;

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    /// User ID
    pub user_id: u64,

    /// 사용자명
    /// Username
    pub username: String,

    /// 역할 (권한 검사에 사용)
    /// Role (used for permission checks)
    pub role: Role,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims (expiration time automatically calculated)
    pub fn new(user_id: u64, username: String, role: Role, expiration_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + (expiration_hours * 3600); // hours to seconds

        Self {
            user_id,
            username,
            role,
            exp,
            iat: now,
        }
    }
}
