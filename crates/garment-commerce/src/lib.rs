//! Storefront domain types and logic for a small garments retailer.
//!
//! This crate provides the pieces a storefront front-end drives:
//!
//! - **Catalog**: Products with flat prices and (color, size, material) variants
//! - **Variant**: Cascading option selection and SKU resolution
//! - **Cart**: Line items keyed by product id or SKU, totals and order summary
//! - **Checkout**: Shipping details, simulated payment, order confirmation
//! - **Account / Session**: Simulated login record and a serializable session
//!
//! # Example
//!
//! ```rust
//! use garment_commerce::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let product = catalog.product(&ProductId::new("1")).unwrap();
//!
//! let mut selection = VariantSelection::new();
//! selection.select_color("Black");
//! selection.select_size("M");
//!
//! let resolved = selection.resolve(&product.variants).unwrap();
//!
//! let mut cart = CartStore::default();
//! cart.add_units(product.variant_candidate(resolved.variant), 2);
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;
pub mod variant;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogQuery, Product, SortOption, Variant};

    // Variant selection
    pub use crate::variant::{
        available_colors, available_materials, available_sizes, resolve_variant, ResolvedVariant,
        SelectionStage, VariantSelection,
    };

    // Cart
    pub use crate::cart::{CartCandidate, CartItem, CartStore, OrderSummary};

    // Checkout
    pub use crate::checkout::{
        CardDetails, CheckoutFlow, CheckoutStep, OrderConfirmation, PaymentMethod,
        ShippingDetails,
    };

    // Account and session
    pub use crate::account::{Credentials, UserRecord};
    pub use crate::session::{SessionId, SessionState};
}
