//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Color and size must both be chosen before a variant can be bought.
    #[error("Please select color and size")]
    SelectionIncomplete,

    /// The selected combination does not exist for this product.
    #[error("This variant is not available: {0}")]
    VariantUnavailable(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Shipping details are missing fields.
    #[error("Please fill in all shipping details (missing {0})")]
    IncompleteShippingDetails(String),

    /// Card payment details are missing fields.
    #[error("Please fill in all card details (missing {0})")]
    IncompleteCardDetails(String),

    /// Card number does not have sixteen digits.
    #[error("Card number must be 16 digits")]
    InvalidCardNumber,

    /// CVV does not have three digits.
    #[error("CVV must be 3 digits")]
    InvalidCvv,

    /// Login form has empty fields.
    #[error("Please fill in all fields")]
    MissingCredentials,

    /// Login email is not shaped like an address.
    #[error("Please enter a valid email address: {0}")]
    InvalidEmail(String),

    /// Unknown sort or payment option name.
    #[error("Unknown {kind}: {value}")]
    UnknownOption { kind: &'static str, value: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
