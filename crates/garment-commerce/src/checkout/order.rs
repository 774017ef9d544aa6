//! Order confirmation.

use crate::cart::OrderSummary;
use crate::checkout::ShippingDetails;
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

impl OrderId {
    /// Order token for an order placed at `placed_at` (`ORD-<unix millis>`).
    pub fn at(placed_at: DateTime<Utc>) -> Self {
        OrderId::new(format!("ORD-{}", placed_at.timestamp_millis()))
    }
}

/// Receipt shown on the success step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Opaque order token.
    pub order_id: OrderId,
    /// When payment completed.
    pub placed_at: DateTime<Utc>,
    /// What was bought, captured before the cart was cleared.
    pub summary: OrderSummary,
    /// Where it ships.
    pub shipping: ShippingDetails,
    /// Payment label (e.g., "Card •••• 1111").
    pub payment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_id_uses_millis() {
        let placed_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(OrderId::at(placed_at).as_str(), "ORD-1700000000123");
    }
}
