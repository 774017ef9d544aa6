//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids, cart line ids and order ids are all strings in the data, but
//! a product id and a cart line id are not interchangeable: a cart line may be
//! keyed by a SKU.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product identifier.
    ProductId
);
define_id!(
    /// Variant record identifier (not the SKU).
    VariantId
);
define_id!(
    /// Cart line identity: a product id for catalog adds, a SKU for variant adds.
    ItemId
);
define_id!(
    /// Opaque order token handed out on checkout success.
    OrderId
);

impl From<&ProductId> for ItemId {
    fn from(id: &ProductId) -> Self {
        Self(id.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ItemId = "SKU-RED-M".into();
        assert_eq!(id.as_str(), "SKU-RED-M");
    }

    #[test]
    fn test_item_id_from_product_id() {
        let product = ProductId::new("7");
        assert_eq!(ItemId::from(&product), ItemId::new("7"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&OrderId::new("ORD-1")).unwrap();
        assert_eq!(json, "\"ORD-1\"");
    }
}
