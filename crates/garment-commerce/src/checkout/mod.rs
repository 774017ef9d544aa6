//! Checkout module.
//!
//! Contains the checkout flow, shipping details, simulated payment and the
//! order confirmation.

mod flow;
mod order;
mod payment;
mod shipping;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::OrderConfirmation;
pub use payment::{CardDetails, PaymentMethod};
pub use shipping::ShippingDetails;
