//! Shopping cart module.
//!
//! Contains the cart store, its line items and the checkout order summary.

mod cart;
mod pricing;

pub use cart::{CartCandidate, CartItem, CartStore};
pub use pricing::{LineSummary, OrderSummary, DEFAULT_SHIPPING_FEE};
