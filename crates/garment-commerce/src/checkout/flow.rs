//! Checkout flow state machine.

use crate::cart::{CartStore, OrderSummary, DEFAULT_SHIPPING_FEE};
use crate::checkout::{OrderConfirmation, PaymentMethod, ShippingDetails};
use crate::ids::OrderId;
use crate::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Review the cart and enter shipping details.
    CartReview,
    /// Choose a payment method and pay.
    Payment,
    /// Order placed.
    Success,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::CartReview => "cart-review",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Success => "success",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::CartReview => "Review",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Success => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::CartReview => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Success => 3,
        }
    }
}

/// Checkout flow state.
///
/// `CartReview → Payment → Success`. Payment is split in two calls,
/// [`submit_payment`](Self::submit_payment) then [`complete`](Self::complete),
/// so a caller can show a processing delay between them. Completing an order
/// clears the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Flat shipping fee for non-empty orders.
    pub shipping_fee: i64,
    /// Details accepted on the review step.
    pub shipping: Option<ShippingDetails>,
    /// Payment accepted on the payment step.
    pub payment: Option<PaymentMethod>,
    /// Set once the order is placed.
    pub confirmation: Option<OrderConfirmation>,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new(DEFAULT_SHIPPING_FEE)
    }
}

impl CheckoutFlow {
    /// Create a new checkout flow.
    pub fn new(shipping_fee: i64) -> Self {
        Self {
            step: CheckoutStep::CartReview,
            shipping_fee,
            shipping: None,
            payment: None,
            confirmation: None,
        }
    }

    /// Order summary for the cart as it is now.
    pub fn summary(&self, cart: &CartStore) -> OrderSummary {
        OrderSummary::for_cart(cart, self.shipping_fee)
    }

    fn expect_step(&self, expected: CheckoutStep, to: CheckoutStep) -> Result<(), CommerceError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    /// Accept shipping details and move to payment.
    pub fn proceed_to_payment(
        &mut self,
        cart: &CartStore,
        details: ShippingDetails,
    ) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::CartReview, CheckoutStep::Payment)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        details.validate()?;

        self.shipping = Some(details);
        self.step = CheckoutStep::Payment;
        Ok(self.step)
    }

    /// Return from payment to the review step. Entered details are kept.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::CartReview)?;
        self.payment = None;
        self.step = CheckoutStep::CartReview;
        Ok(self.step)
    }

    /// Validate and hold a payment method.
    pub fn submit_payment(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Success)?;
        method.validate()?;
        self.payment = Some(method);
        Ok(())
    }

    /// Place the order: capture the summary, issue an order id and clear the cart.
    pub fn complete(
        &mut self,
        cart: &mut CartStore,
        placed_at: DateTime<Utc>,
    ) -> Result<&OrderConfirmation, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Success)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let (Some(shipping), Some(payment)) = (&self.shipping, &self.payment) else {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Success.as_str().to_string(),
            });
        };

        let confirmation = OrderConfirmation {
            order_id: OrderId::at(placed_at),
            placed_at,
            summary: OrderSummary::for_cart(cart, self.shipping_fee),
            shipping: shipping.clone(),
            payment: payment.label(),
        };

        cart.clear();
        self.step = CheckoutStep::Success;
        Ok(self.confirmation.insert(confirmation))
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Success
    }
}
