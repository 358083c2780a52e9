use crate::shared::database::{Database, UserRepository};
use crate::domains::auth::models::{LoginRequest, Role, User};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::AuthError;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use tracing::{info, warn};

// 인증 서비스
// AuthService: handles authentication business logic
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    // 로그인 (비즈니스 로직)
    // Returns: (User, access_token)
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 사용자명으로 사용자 조회
        let user = user_repo
            .get_user_by_username(request.username.trim())
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        verify_password(&request.password, &user.password_hash)?;

        // 3. Access Token 발급
        let token = self
            .jwt_service
            .generate_access_token(user.id, &user.username, user.role)?;

        info!(user_id = user.id, role = user.role.name(), "User logged in");
        Ok((user, token))
    }

    pub async fn get_user_info(&self, user_id: u64) -> Result<User, AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        user_repo
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidToken) // 토큰은 유효하지만 사용자가 삭제됨
    }

    /// 초기 관리자 계정 생성
    /// Admin 역할 사용자가 한 명도 없을 때만 생성한다.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        let admin_count = user_repo
            .count_by_role(Role::Admin)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to count admins: {}", e)))?;
        if admin_count > 0 {
            return Ok(());
        }

        if user_repo
            .get_user_by_username(username)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .is_some()
        {
            warn!(username, "Cannot bootstrap admin: username is taken by a non-admin user");
            return Ok(());
        }

        let password_hash = hash_password(password)?;
        let user = user_repo
            .create_user(username, &password_hash, Role::Admin)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create admin: {}", e)))?;

        info!(user_id = user.id, username, "Bootstrap admin account created");
        Ok(())
    }
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("latte-art").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("latte-art", &hash).is_ok());
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let hash = hash_password("latte-art").unwrap();
        assert!(matches!(
            verify_password("flat-white", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn malformed_hash_is_a_verification_failure() {
        assert!(matches!(
            verify_password("anything", "plain-text"),
            Err(AuthError::PasswordVerificationFailed(_))
        ));
    }
}
