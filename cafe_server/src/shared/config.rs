use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// 서버 설정
/// Server configuration (loaded from environment variables)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL 연결 문자열
    pub database_url: String,
    /// 커넥션 풀 최대 크기
    pub db_max_connections: u32,
    /// HTTP 리스닝 포트
    pub port: u16,
    /// JWT 서명 키
    pub jwt_secret: String,
    /// Access Token 만료 시간 (시간 단위)
    pub jwt_expiration_hours: i64,
    /// 허용할 CORS origin (None이면 모든 origin 허용)
    pub cors_origin: Option<String>,
    /// 초기 관리자 계정 (비밀번호가 설정된 경우에만 생성)
    pub admin_username: String,
    pub admin_password: Option<String>,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    /// Load configuration from `.env` and the process environment
    ///
    /// DATABASE_URL이 없으면 DB_USER / DB_PASSWORD / DB_HOST / DB_PORT / DB_NAME 으로 조합
    pub fn from_env() -> Self {
        // .env 파일이 없어도 에러 아님
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "cafe".to_string());
            info!("DATABASE_URL not set, using DB_* variables (host={host}, db={name})");
            format!("postgresql://{user}:{password}@{host}:{port}/{name}")
        });

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using the development default");
            DEFAULT_JWT_SECRET.to_string()
        });

        Self {
            database_url,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            port: parse_or("PORT", 5000),
            jwt_secret,
            jwt_expiration_hours: parse_or("JWT_EXPIRATION_HOURS", 24),
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|v| !v.trim().is_empty()),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?} ({e}), using default: {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        // SAFETY: 테스트 전용 키, 다른 테스트와 공유하지 않음
        unsafe { env::set_var("CAFE_TEST_PARSE_OR_PORT", "not-a-port") };
        let port: u16 = parse_or("CAFE_TEST_PARSE_OR_PORT", 5000);
        assert_eq!(port, 5000);

        unsafe { env::set_var("CAFE_TEST_PARSE_OR_PORT", "8080") };
        let port: u16 = parse_or("CAFE_TEST_PARSE_OR_PORT", 5000);
        assert_eq!(port, 8080);
    }

    #[test]
    fn parse_or_missing_key_uses_default() {
        let hours: i64 = parse_or("CAFE_TEST_DEFINITELY_UNSET_KEY", 24);
        assert_eq!(hours, 24);
    }
}
