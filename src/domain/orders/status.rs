//! Order status state machine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Order status.
///
/// ```text
/// Pending -> Approved -> Shipping -> Completed (terminal)
///        \-> Cancelled (terminal, from any non-terminal status)
/// ```
///
/// Only the transitions out of a terminal state are rejected; everything
/// else, including backwards moves, is allowed so dispatchers can correct
/// mistakes. The wire encoding uses the store's display labels, so existing
/// records round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, awaiting review.
    #[serde(rename = "Đã đặt, chờ duyệt")]
    Pending,

    /// Approved for fulfilment.
    #[serde(rename = "Đã duyệt")]
    Approved,

    /// Out for delivery.
    #[serde(rename = "Đang giao hàng")]
    Shipping,

    /// Delivered. Terminal.
    #[serde(rename = "Đã hoàn thành")]
    Completed,

    /// Cancelled by the customer or an admin. Terminal.
    #[serde(rename = "Đã hủy")]
    Cancelled,
}

impl OrderStatus {
    /// Status of a freshly placed order.
    pub const INITIAL: Self = Self::Pending;

    /// Whether no further transition out of this status is permitted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The display label, which is also the wire encoding.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Đã đặt, chờ duyệt",
            Self::Approved => "Đã duyệt",
            Self::Shipping => "Đang giao hàng",
            Self::Completed => "Đã hoàn thành",
            Self::Cancelled => "Đã hủy",
        }
    }

    /// Whether an order in this status may move to `next`.
    ///
    /// Re-asserting the current status is always allowed, which is what makes
    /// cancellation idempotent.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || !self.is_terminal()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a status label this crate does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status label: {0}")]
pub struct UnknownStatusLabel(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatusLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Pending,
            Self::Approved,
            Self::Shipping,
            Self::Completed,
            Self::Cancelled,
        ]
        .into_iter()
        .find(|status| status.label() == s)
        .ok_or_else(|| UnknownStatusLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_encoding_uses_the_store_labels() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Pending).ok(),
            Some(json!("Đã đặt, chờ duyệt"))
        );
        assert_eq!(
            serde_json::to_value(OrderStatus::Cancelled).ok(),
            Some(json!("Đã hủy"))
        );
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Shipping,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.label().parse(), Ok(status));
        }
    }

    #[test]
    fn terminal_states_only_admit_themselves() {
        assert!(OrderStatus::Completed.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn backwards_moves_are_permitted_outside_terminal_states() {
        assert!(OrderStatus::Shipping.can_transition_to(OrderStatus::Approved));
        assert!(OrderStatus::Approved.can_transition_to(OrderStatus::Pending));
    }
}
