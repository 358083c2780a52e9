use crate::domains::auth::models::{LoginRequest, LoginResponse, LoginUser, UserResponse};
use crate::shared::services::AppState;
use crate::shared::errors::ApiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use axum::extract::State;
use crate::shared::middleware::extractors::Json;

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid username or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (user, token) = app_state.auth_state.auth_service.login(request).await?;

    Ok(Json(LoginResponse {
        token,
        user: LoginUser {
            id: user.id,
            username: user.username,
            role: user.role,
        },
        message: "Login successful".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state
        .auth_state
        .auth_service
        .get_user_info(authenticated_user.user_id)
        .await?;

    Ok(Json(user.into()))
}
