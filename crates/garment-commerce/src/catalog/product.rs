//! Product and variant types.

use crate::cart::CartCandidate;
use crate::ids::{ItemId, ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// A garment in the catalog.
///
/// Every variant of a product sells at the same flat `price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category shown in the shop sidebar (e.g., "T-Shirts").
    pub category: String,
    /// Price in whole currency units, shared by all variants.
    pub price: i64,
    /// Free-form description; paragraphs are separated by blank lines.
    #[serde(default)]
    pub description: String,
    /// Display reference; the product name is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Purchasable combinations, in catalog order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product without variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
            image: None,
            variants: Vec::new(),
        }
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The display reference for this product.
    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.name)
    }

    /// Check if this product has selectable variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Description paragraphs, split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Find a variant by SKU.
    pub fn variant_by_sku(&self, sku: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.sku == sku)
    }

    /// Cart candidate for a quick add from a product listing, keyed by product id.
    pub fn catalog_candidate(&self) -> CartCandidate {
        CartCandidate {
            id: ItemId::from(&self.id),
            name: self.name.clone(),
            price: self.price,
            image: self.display_image().to_string(),
        }
    }

    /// Cart candidate for a resolved variant, keyed by SKU.
    pub fn variant_candidate(&self, variant: &Variant) -> CartCandidate {
        CartCandidate {
            id: ItemId::new(variant.sku.clone()),
            name: self.name.clone(),
            price: self.price,
            image: self.display_image().to_string(),
        }
    }
}

/// One purchasable (color, size, material) combination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Variant record identifier.
    pub id: VariantId,
    /// Stock keeping unit (unique across the catalog).
    pub sku: String,
    /// Color (e.g., "Black").
    pub color: String,
    /// Size (e.g., "M").
    pub size: String,
    /// Fabric (e.g., "Cotton").
    pub material: String,
}

impl Variant {
    /// Create a new variant.
    pub fn new(
        id: impl Into<VariantId>,
        sku: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            color: color.into(),
            size: size.into(),
            material: material.into(),
        }
    }

    /// Human-readable label (e.g., "Black / M / Cotton").
    pub fn label(&self) -> String {
        format!("{} / {} / {}", self.color, self.size, self.material)
    }
}
