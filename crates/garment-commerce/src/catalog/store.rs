//! Catalog reference data.

use crate::catalog::{CatalogQuery, Product, Variant};
use crate::ids::ProductId;
use crate::money::Currency;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// The product catalog, loaded once and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Currency all prices are expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Products in featured order.
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products.
    pub fn new(products: Vec<Product>, currency: Currency) -> Self {
        Self { currency, products }
    }

    /// Parse a catalog JSON document (`{"currency": "INR", "products": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog shipped with this crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing when it does not exist.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Find the product and variant that own a SKU.
    pub fn find_sku(&self, sku: &str) -> Option<(&Product, &Variant)> {
        self.products
            .iter()
            .find_map(|p| p.variant_by_sku(sku).map(|v| (p, v)))
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// List products matching a shop query.
    pub fn browse(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.currency, Currency::INR);
        assert!(catalog.products.iter().all(|p| p.has_variants()));
    }

    #[test]
    fn test_bundled_skus_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let mut skus: Vec<&str> = catalog
            .products
            .iter()
            .flat_map(|p| p.variants.iter().map(|v| v.sku.as_str()))
            .collect();
        let total = skus.len();
        skus.sort_unstable();
        skus.dedup();
        assert_eq!(skus.len(), total);
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let catalog = Catalog::new(
            vec![
                Product::new("1", "Tee", "T-Shirts", 499),
                Product::new("2", "Oxford", "Shirts", 1299),
                Product::new("3", "Henley", "T-Shirts", 699),
            ],
            Currency::INR,
        );
        assert_eq!(catalog.categories(), vec!["Shirts", "T-Shirts"]);
    }

    #[test]
    fn test_require_missing_product() {
        let catalog = Catalog::default();
        let err = catalog.require(&ProductId::new("404")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(id) if id == "404"));
    }

    #[test]
    fn test_find_sku() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.products[0];
        let sku = first.variants[0].sku.clone();

        let (product, variant) = catalog.find_sku(&sku).unwrap();
        assert_eq!(product.id, first.id);
        assert_eq!(variant.sku, sku);
        assert!(catalog.find_sku("NO-SUCH-SKU").is_none());
    }

    #[test]
    fn test_from_json_defaults() {
        let catalog = Catalog::from_json(
            r#"{"products":[{"id":"9","name":"Scarf","category":"Accessories","price":299}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.currency, Currency::INR);
        assert!(catalog.products[0].variants.is_empty());
        assert_eq!(catalog.products[0].description, "");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
