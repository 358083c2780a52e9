use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use crate::domains::auth::models::{Permission, Role};
use crate::shared::errors::{ApiError, AuthError};
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// 엔드포인트 권한 검사
    /// 사용법:
    /// ```rust,ignore
    /// pub async fn list_users(
    ///     State(app_state): State<AppState>,
    ///     user: AuthenticatedUser,
    /// ) -> Result<...> {
    ///     user.require(Permission::ManageUsers)?;
    ///     // ...
    /// }
    /// ```
    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        if self.role.has(permission) {
            Ok(())
        } else {
            tracing::debug!(
                user_id = self.user_id,
                role = self.role.name(),
                ?permission,
                "Permission denied"
            );
            Err(AuthError::Forbidden { permission })
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        // 2. "Bearer <token>" 형식 파싱
        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        // 3. JWT 검증 (AppState에서 가져옴)
        let claims = state.auth_state.jwt_service.verify_access_token(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}
