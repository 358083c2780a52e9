use std::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// 주문 상태
// =====================================================
// 주문 접수 → 제조 중 → 제조 완료
//     └────→ 취소됨 (주문 접수 상태에서만 가능, 재고 복구)
//
// DB(orders.status)와 JSON 모두 한글 문자열을 그대로 사용한다.
// 요청 본문에서는 영문 별칭(received, preparing, completed, cancelled)도 허용.
// =====================================================

/// 주문 상태
/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "주문 접수", alias = "received")]
    Received,
    #[serde(rename = "제조 중", alias = "preparing")]
    Preparing,
    #[serde(rename = "제조 완료", alias = "completed")]
    Completed,
    #[serde(rename = "취소됨", alias = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// DB / JSON에 저장되는 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "주문 접수",
            OrderStatus::Preparing => "제조 중",
            OrderStatus::Completed => "제조 완료",
            OrderStatus::Cancelled => "취소됨",
        }
    }

    /// DB 문자열 파싱 (영문 별칭 포함)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "주문 접수" | "received" => Some(OrderStatus::Received),
            "제조 중" | "preparing" => Some(OrderStatus::Preparing),
            "제조 완료" | "completed" => Some(OrderStatus::Completed),
            "취소됨" | "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// 허용되는 상태 전이인지
    /// received→preparing, preparing→completed, received→cancelled 만 허용
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Received, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::Completed)
                | (OrderStatus::Received, OrderStatus::Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pipeline_and_cancel_transitions_are_allowed() {
        let allowed = [
            (OrderStatus::Received, OrderStatus::Preparing),
            (OrderStatus::Preparing, OrderStatus::Completed),
            (OrderStatus::Received, OrderStatus::Cancelled),
        ];

        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in OrderStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(OrderStatus::ALL.iter().all(|to| !from.can_transition_to(*to)));
        }
    }

    #[test]
    fn serializes_as_korean_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"제조 중\""
        );
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn accepts_english_aliases() {
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
        let status: OrderStatus = serde_json::from_str("\"제조 완료\"").unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert!(serde_json::from_str::<OrderStatus>("\"shipped\"").is_err());
        assert_eq!(OrderStatus::parse("pending"), None);
    }
}
