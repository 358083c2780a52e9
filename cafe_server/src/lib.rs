//! 카페 주문 API 서버
//!
//! 고객용 메뉴 조회 / 주문 생성과 관리자용 주문 처리, 재고 / 메뉴 / 사용자 관리를
//! PostgreSQL 위의 REST API로 제공한다.

pub mod domains;
pub mod routes;
pub mod shared;
