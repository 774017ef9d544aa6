//! Cart store and line item types.

use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// What a view hands to the cart when the shopper clicks "add to cart".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartCandidate {
    /// Product id for listing adds, SKU for variant adds.
    pub id: ItemId,
    /// Display name at time of add.
    pub name: String,
    /// Unit price at time of add, in whole currency units.
    pub price: i64,
    /// Display reference.
    pub image: String,
}

impl CartCandidate {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: i64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Line identity; unique within a cart.
    pub id: ItemId,
    /// Display name captured at add time.
    pub name: String,
    /// Unit price captured at add time; never re-read from the catalog.
    pub price: i64,
    /// Display reference.
    pub image: String,
    /// Units of this line, at least 1.
    pub quantity: i64,
}

impl CartItem {
    fn from_candidate(candidate: CartCandidate, quantity: i64) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            price: candidate.price,
            image: candidate.image,
            quantity,
        }
    }

    /// Price × quantity, saturating at `i64::MAX`.
    pub fn subtotal(&self) -> i64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// The shopper's cart.
///
/// Lines are kept in insertion order and keyed by [`ItemId`]; adding an id
/// that is already present bumps its quantity instead of adding a line.
/// Every derived value is computed from the current lines on each call.
///
/// Prices and quantities are not validated here; quantity and total
/// arithmetic saturates instead of overflowing. All prices are taken to be
/// in the store's currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartStore {
    /// Currency totals are reported in.
    #[serde(default)]
    currency: Currency,
    /// Lines in insertion order.
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Add one unit. A new id is appended after the existing lines.
    pub fn add_item(&mut self, candidate: CartCandidate) {
        self.add_units(candidate, 1);
    }

    /// Add `units` units, the same as calling [`add_item`](Self::add_item)
    /// `units` times. Zero or negative `units` does nothing.
    pub fn add_units(&mut self, candidate: CartCandidate, units: i64) {
        if units <= 0 {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == candidate.id) {
            existing.quantity = existing.quantity.saturating_add(units);
            return;
        }

        self.items.push(CartItem::from_candidate(candidate, units));
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &ItemId) {
        self.items.retain(|i| &i.id != id);
    }

    /// Set a line's quantity exactly. A quantity of zero or less removes the line.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity;
        }
    }

    /// One more unit of an existing line.
    pub fn increment(&mut self, id: &ItemId) {
        if let Some(quantity) = self.get(id).map(|i| i.quantity) {
            self.update_quantity(id, quantity.saturating_add(1));
        }
    }

    /// One fewer unit; a line at quantity 1 is removed.
    pub fn decrement(&mut self, id: &ItemId) {
        if let Some(quantity) = self.get(id).map(|i| i.quantity) {
            self.update_quantity(id, quantity - 1);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Σ(price × quantity) over all lines.
    pub fn total(&self) -> Money {
        Money::sum(self.items.iter().map(CartItem::subtotal), self.currency)
    }

    /// Σ(quantity) over all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, i| count.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Report totals in another currency. Line prices are kept as they are.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}
