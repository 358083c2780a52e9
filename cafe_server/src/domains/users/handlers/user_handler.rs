use crate::domains::auth::models::{Permission, UserResponse};
use crate::domains::users::models::{CreateUserRequest, RoleResponse, UpdateUserRequest};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::middleware::extractors::{Json, Path};
use axum::{extract::State, http::StatusCode};

// 사용자 관리 핸들러 (Admin 전용)

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "User list", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    user.require(Permission::ManageUsers)?;

    let users = app_state.users_state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid user or unknown role"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    user.require(Permission::ManageUsers)?;

    let created = app_state.users_state.user_service.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    patch,
    path = "/api/admin/users/{user_id}",
    params(
        ("user_id" = u64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid update or unknown role"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(user_id): Path<u64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    user.require(Permission::ManageUsers)?;

    let updated = app_state
        .users_state
        .user_service
        .update_user(user_id, request)
        .await?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    params(
        ("user_id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Cannot delete your own account"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(user_id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    user.require(Permission::ManageUsers)?;

    app_state
        .users_state
        .user_service
        .delete_user(user.user_id, user_id)
        .await?;

    Ok(Json(serde_json::json!({
        "id": user_id,
        "message": "User deleted"
    })))
}

#[utoipa::path(
    get,
    path = "/api/admin/roles",
    responses(
        (status = 200, description = "Role list", body = Vec<RoleResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Users"
)]
pub async fn list_roles(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    user.require(Permission::ManageUsers)?;

    let roles = app_state.users_state.user_service.list_roles().await?;
    Ok(Json(roles))
}
