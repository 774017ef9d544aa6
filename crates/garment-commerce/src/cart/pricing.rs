//! Order summary shown on the cart and checkout pages.

use crate::cart::CartStore;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat shipping charge applied to any non-empty order.
pub const DEFAULT_SHIPPING_FEE: i64 = 100;

/// Pricing breakdown for a cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineSummary>,
    /// Units across all lines.
    pub item_count: i64,
    /// Σ(price × quantity).
    pub subtotal: Money,
    /// Flat fee when the cart has at least one line, zero otherwise.
    pub shipping: Money,
    /// subtotal + shipping.
    pub grand_total: Money,
}

impl OrderSummary {
    /// Summarize a cart with the given flat shipping fee.
    pub fn for_cart(cart: &CartStore, shipping_fee: i64) -> Self {
        let currency = cart.currency();
        let lines: Vec<LineSummary> = cart
            .lines()
            .iter()
            .map(|item| LineSummary {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: Money::new(item.price, currency),
                subtotal: Money::new(item.subtotal(), currency),
            })
            .collect();

        let subtotal = cart.total();
        let shipping = if lines.is_empty() {
            Money::zero(currency)
        } else {
            Money::new(shipping_fee, currency)
        };

        Self {
            item_count: cart.item_count(),
            grand_total: subtotal + shipping,
            subtotal,
            shipping,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One line of an [`OrderSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSummary {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// unit_price × quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartCandidate;
    use crate::money::Currency;

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let summary = OrderSummary::for_cart(&CartStore::default(), DEFAULT_SHIPPING_FEE);
        assert!(summary.is_empty());
        assert!(summary.shipping.is_zero());
        assert!(summary.grand_total.is_zero());
    }

    #[test]
    fn test_shipping_added_once() {
        let mut cart = CartStore::new(Currency::INR);
        cart.add_units(CartCandidate::new("a", "Tee", 599, "Tee"), 2);
        cart.add_item(CartCandidate::new("b", "Chinos", 1599, "Chinos"));

        let summary = OrderSummary::for_cart(&cart, DEFAULT_SHIPPING_FEE);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal.amount, 2797);
        assert_eq!(summary.shipping.amount, 100);
        assert_eq!(summary.grand_total.amount, 2897);
        assert_eq!(summary.lines[0].subtotal.amount, 1198);
        assert_eq!(summary.lines[1].unit_price, Money::new(1599, Currency::INR));
    }

    #[test]
    fn test_custom_shipping_fee() {
        let mut cart = CartStore::default();
        cart.add_item(CartCandidate::new("a", "Tee", 599, "Tee"));

        let summary = OrderSummary::for_cart(&cart, 0);
        assert_eq!(summary.grand_total, summary.subtotal);
    }
}
