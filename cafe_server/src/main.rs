use axum::Router;
use axum::http::{header, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cafe_server::routes::create_router;
use cafe_server::shared::config::AppConfig;
use cafe_server::shared::database::Database;
use cafe_server::shared::services::AppState;

// Import models for OpenAPI schema
use cafe_server::domains::auth::models::*;
use cafe_server::domains::menu::models::*;
use cafe_server::domains::order::models::*;
use cafe_server::domains::users::models::*;
use cafe_server::routes::health::HealthResponse;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        cafe_server::routes::health::health_check,
        cafe_server::domains::auth::handlers::auth_handler::login,
        cafe_server::domains::auth::handlers::auth_handler::get_me,
        cafe_server::domains::menu::handlers::menu_handler::list_menus,
        cafe_server::domains::menu::handlers::menu_handler::create_menu,
        cafe_server::domains::menu::handlers::menu_handler::update_menu,
        cafe_server::domains::menu::handlers::menu_handler::delete_menu,
        cafe_server::domains::menu::handlers::menu_handler::update_stock,
        cafe_server::domains::order::handlers::order_handler::place_order,
        cafe_server::domains::order::handlers::order_handler::list_orders,
        cafe_server::domains::order::handlers::order_handler::get_summary,
        cafe_server::domains::order::handlers::order_handler::get_order,
        cafe_server::domains::order::handlers::order_handler::update_order_status,
        cafe_server::domains::users::handlers::user_handler::list_users,
        cafe_server::domains::users::handlers::user_handler::create_user,
        cafe_server::domains::users::handlers::user_handler::update_user,
        cafe_server::domains::users::handlers::user_handler::delete_user,
        cafe_server::domains::users::handlers::user_handler::list_roles
    ),
    components(schemas(
        HealthResponse,
        LoginRequest,
        LoginResponse,
        LoginUser,
        UserResponse,
        Role,
        Menu,
        MenuOption,
        MenuOptionInput,
        CreateMenuRequest,
        UpdateMenuRequest,
        UpdateStockRequest,
        OrderStatus,
        OrderLineRequest,
        PlaceOrderRequest,
        PlaceOrderResponse,
        OrderItem,
        Order,
        UpdateOrderStatusRequest,
        OrderSummary,
        CreateUserRequest,
        UpdateUserRequest,
        RoleResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Auth", description = "Login and current user"),
        (name = "Menu", description = "Public menu listing"),
        (name = "Menu Admin", description = "Menu CRUD and stock overrides (Manager+)"),
        (name = "Orders", description = "Order placement"),
        (name = "Order Admin", description = "Order pipeline (Staff+)"),
        (name = "Users", description = "User and role management (Admin)")
    ),
    info(
        title = "Cafe Ordering API",
        description = "Coffee-shop storefront and admin console API",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 로그 + 설정
    init_tracing();
    let config = AppConfig::from_env();

    // 2. DB 연결 + 마이그레이션
    let db = Database::new(&config.database_url, config.db_max_connections).await?;
    db.initialize().await?;

    // 3. AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, &config);

    // 초기 관리자 계정 (ADMIN_PASSWORD가 있을 때만)
    match &config.admin_password {
        Some(password) => {
            app_state
                .auth_state
                .auth_service
                .bootstrap_admin(&config.admin_username, password)
                .await?;
        }
        None => info!("ADMIN_PASSWORD not set, skipping admin bootstrap"),
    }

    // 4. Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // 5. 서버 시작
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://localhost:{}", config.port);
    info!("Swagger UI available at http://localhost:{}/docs", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .init();
}

// CORS 설정: CORS_ORIGIN이 없으면 모든 origin 허용
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    match origin.map(str::parse::<HeaderValue>) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(e)) => {
            warn!("Invalid CORS_ORIGIN ({e}), allowing any origin");
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}
