use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// Menu 모델
// =====================================================
// 역할: 판매 가능한 메뉴와 메뉴별 추가 옵션
//
// 금액 단위: 원 (정수, 최소 통화 단위)
// 재고(stock): 0 이상. 주문 시 차감, 주문 취소 시 복구
// =====================================================

pub const DEFAULT_CATEGORY: &str = "Coffee";

/// 메뉴 옵션 (샷 추가, 시럽 등)
/// Priced add-on selectable per menu item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(as = MenuOption)]
pub struct MenuOption {
    #[schema(example = 1)]
    pub id: u64,

    /// 옵션이 속한 메뉴 ID
    #[schema(example = 1)]
    pub menu_id: u64,

    #[schema(example = "샷 추가")]
    pub name: String,

    /// 추가 금액
    #[schema(example = 500)]
    pub price: i64,
}

/// 메뉴 정보 (옵션 포함)
/// Menu item with its options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Menu)]
pub struct Menu {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "아메리카노")]
    pub name: String,

    /// 기본 가격
    #[schema(example = 3000)]
    pub price: i64,

    #[schema(example = "Coffee")]
    pub category: String,

    /// 남은 재고
    #[schema(example = 100)]
    pub stock: i32,

    pub image_url: Option<String>,

    pub description: Option<String>,

    pub options: Vec<MenuOption>,
}

/// 옵션 입력 (메뉴 생성 / 수정 시)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = MenuOptionInput)]
pub struct MenuOptionInput {
    #[schema(example = "샷 추가")]
    pub name: String,

    #[serde(default)]
    #[schema(example = 500)]
    pub price: i64,
}

/// 메뉴 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateMenuRequest)]
pub struct CreateMenuRequest {
    #[schema(example = "콜드브루")]
    pub name: String,

    #[schema(example = 4500)]
    pub price: i64,

    /// 기본값: "Coffee"
    pub category: Option<String>,

    /// 기본값: 0
    pub stock: Option<i32>,

    pub image_url: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub options: Vec<MenuOptionInput>,
}

/// 메뉴 부분 수정 요청
/// `options`가 있으면 옵션 목록 전체를 교체한다
///
/// `image_url` / `description`:
/// - 키 없음 → 유지 (`None`)
/// - `null` → 삭제 (`Some(None)`)
/// - 값 → 변경 (`Some(Some(..))`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateMenuRequest)]
pub struct UpdateMenuRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub image_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub description: Option<Option<String>>,
    pub options: Option<Vec<MenuOptionInput>>,
}

/// 재고 직접 수정 요청 (관리자)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateStockRequest)]
pub struct UpdateStockRequest {
    #[schema(example = 30)]
    pub stock: i32,
}

impl CreateMenuRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        validate_options(&self.options)
    }
}

impl UpdateMenuRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        match &self.options {
            Some(options) => validate_options(options),
            None => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Menu name must not be empty".to_string());
    }
    Ok(())
}

fn validate_price(price: i64) -> Result<(), String> {
    if price < 0 {
        return Err(format!("Menu price must not be negative: {}", price));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> Result<(), String> {
    if stock < 0 {
        return Err(format!("Stock must not be negative: {}", stock));
    }
    Ok(())
}

fn validate_options(options: &[MenuOptionInput]) -> Result<(), String> {
    for option in options {
        if option.name.trim().is_empty() {
            return Err("Option name must not be empty".to_string());
        }
        if option.price < 0 {
            return Err(format!("Option '{}' has a negative price", option.name));
        }
    }
    Ok(())
}
