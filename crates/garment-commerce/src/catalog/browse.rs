//! Shop browse query: category filter plus price sort.

use crate::catalog::Product;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortOption::Featured),
            "price-low" => Ok(SortOption::PriceLow),
            "price-high" => Ok(SortOption::PriceHigh),
            _ => Err(CommerceError::UnknownOption {
                kind: "sort option",
                value: s.to_string(),
            }),
        }
    }
}

/// A shop listing query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Only show this category; `None` means all products.
    pub category: Option<String>,
    /// Sort order.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create a query for all products in catalog order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Apply the query. Price sorts are stable, so ties keep catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut listed: Vec<&Product> = products
            .iter()
            .filter(|p| match &self.category {
                Some(category) => &p.category == category,
                None => true,
            })
            .collect();

        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceLow => listed.sort_by_key(|p| p.price),
            SortOption::PriceHigh => listed.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        listed
    }
}
