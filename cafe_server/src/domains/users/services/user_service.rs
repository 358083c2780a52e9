use crate::shared::database::{is_unique_violation, Database, RoleRepository, UserRepository};
use crate::shared::errors::AuthError;
use crate::domains::auth::models::{Role, User};
use crate::domains::auth::services::hash_password;
use crate::domains::users::models::{CreateUserRequest, RoleResponse, UpdateUserRequest};
use tracing::info;

// 사용자 관리 서비스 (관리자 전용)
// UserService: admin user CRUD
#[derive(Clone)]
pub struct UserService {
    db: Database,
}

fn db_error(context: &str, e: impl std::fmt::Display) -> AuthError {
    AuthError::DatabaseError(format!("{}: {:#}", context, e))
}

fn resolve_role(role_id: i32) -> Result<Role, AuthError> {
    Role::from_id(role_id).ok_or(AuthError::RoleNotFound { id: role_id })
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn repo(&self) -> UserRepository {
        UserRepository::new(self.db.pool().clone())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        self.repo()
            .list_users()
            .await
            .map_err(|e| db_error("Failed to list users", e))
    }

    pub async fn list_roles(&self) -> Result<Vec<RoleResponse>, AuthError> {
        RoleRepository::new(self.db.pool().clone())
            .list_roles()
            .await
            .map_err(|e| db_error("Failed to list roles", e))
    }

    /// 사용자 생성
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, AuthError> {
        request.validate().map_err(AuthError::Validation)?;
        let role = resolve_role(request.role_id)?;
        let username = request.username.trim();

        let repo = self.repo();

        // 1. 사용자명 중복 확인
        let existing = repo
            .get_user_by_username(username)
            .await
            .map_err(|e| db_error("Failed to check username", e))?;
        if existing.is_some() {
            return Err(AuthError::UsernameAlreadyExists {
                username: username.to_string(),
            });
        }

        // 2. 비밀번호 해싱 후 생성
        // 동시 요청이 1번을 함께 통과하면 UNIQUE 제약이 최종 판정
        let password_hash = hash_password(&request.password)?;
        let user = repo
            .create_user(username, &password_hash, role)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AuthError::UsernameAlreadyExists {
                        username: username.to_string(),
                    }
                } else {
                    db_error("Failed to create user", e)
                }
            })?;

        info!(user_id = user.id, role = role.name(), "User created");
        Ok(user)
    }

    /// 역할 / 비밀번호 변경
    pub async fn update_user(
        &self,
        user_id: u64,
        request: UpdateUserRequest,
    ) -> Result<User, AuthError> {
        request.validate().map_err(AuthError::Validation)?;
        let role = request.role_id.map(resolve_role).transpose()?;
        let password_hash = request.password.as_deref().map(hash_password).transpose()?;

        let user = self
            .repo()
            .update_user(user_id, role, password_hash.as_deref())
            .await
            .map_err(|e| db_error("Failed to update user", e))?
            .ok_or(AuthError::UserNotFound { id: user_id })?;

        info!(user_id, role = user.role.name(), "User updated");
        Ok(user)
    }

    /// 사용자 삭제 (본인 계정은 삭제 불가)
    pub async fn delete_user(&self, actor_id: u64, user_id: u64) -> Result<(), AuthError> {
        if actor_id == user_id {
            return Err(AuthError::CannotDeleteSelf);
        }

        let deleted = self
            .repo()
            .delete_user(user_id)
            .await
            .map_err(|e| db_error("Failed to delete user", e))?;
        if !deleted {
            return Err(AuthError::UserNotFound { id: user_id });
        }

        info!(user_id, deleted_by = actor_id, "User deleted");
        Ok(())
    }
}
