//! Shopping cart
//!
//! Ordered mapping from [`ItemId`] to [`CartItem`]. Iteration follows
//! insertion order, which is what the order message shows. Entries are only
//! ever replaced whole. The delivery surcharge belongs to the cart, not to any
//! entry, so it survives items being added, replaced or removed.

use crate::checkout::Fulfillment;
use crate::types::{Amount, CartItem, ItemId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Items selected in the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    items: IndexMap<ItemId, CartItem>,
    #[serde(default)]
    delivery_fee: Amount,
}

impl Cart {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an entry
    #[inline]
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CartItem> {
        self.items.get(&id)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &CartItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// Items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Add an item under the next free identifier
    pub fn add(&mut self, item: CartItem) -> ItemId {
        let id = match self.items.keys().max() {
            None => ItemId(1),
            Some(last) => last
                .next()
                .unwrap_or_else(|| self.first_free_id()),
        };

        tracing::debug!(%id, title = %item.title, "adding item to cart");
        self.items.insert(id, item);
        id
    }

    fn first_free_id(&self) -> ItemId {
        (1..=u64::MAX)
            .map(ItemId)
            .find(|id| !self.items.contains_key(id))
            .unwrap_or(ItemId(0))
    }

    /// Replace an entry; an item with zero quantity is removed instead
    pub fn update(&mut self, id: ItemId, item: CartItem) {
        if item.quantity == 0 {
            self.remove(id);
            return;
        }

        tracing::debug!(%id, quantity = item.quantity, "updating cart item");
        self.items.insert(id, item);
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, id: ItemId) -> Option<CartItem> {
        let removed = self.items.shift_remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "removed cart item");
        }
        removed
    }

    /// Take one unit off an entry, removing it when it reaches zero
    pub fn decrement(&mut self, id: ItemId) {
        if let Some(item) = self.items.get(&id) {
            let item = CartItem {
                quantity: item.quantity.saturating_sub(1),
                ..item.clone()
            };
            self.update(id, item);
        }
    }

    /// Set the unit count of an entry from the edit form
    ///
    /// The count lives on the first option of the item's own category and
    /// never goes below 1. Returns `false` if the entry does not exist.
    pub fn set_item_quantity(&mut self, id: ItemId, quantity: u32) -> bool {
        let Some(item) = self.items.get(&id) else {
            return false;
        };

        let mut updated = item.clone();
        let own = updated
            .options
            .get(&item.category)
            .and_then(|options| options.first())
            .cloned()
            .unwrap_or_else(|| item.as_option());

        updated
            .options
            .insert(item.category.clone(), vec![own.with_quantity(quantity.max(1))]);
        self.update(id, updated);
        true
    }

    /// Delivery surcharge carried by the cart
    ///
    /// A flat fee applied once per order. An empty cart charges nothing, but
    /// keeps the fee for items added later.
    #[must_use]
    pub fn delivery_fee(&self) -> Amount {
        if self.items.is_empty() {
            0
        } else {
            self.delivery_fee.max(0)
        }
    }

    /// Check if a delivery surcharge applies
    #[inline]
    #[must_use]
    pub fn has_delivery(&self) -> bool {
        self.delivery_fee() > 0
    }

    /// Record the chosen fulfillment method
    ///
    /// Delivery sets the cart's surcharge to `fee`; pickup clears it.
    pub fn apply_fulfillment(&mut self, fulfillment: Fulfillment, fee: Amount) {
        tracing::debug!(?fulfillment, fee, "applying fulfillment to cart");

        self.delivery_fee = match fulfillment {
            Fulfillment::Delivery => fee,
            Fulfillment::Pickup => 0,
        };
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for item in iter {
            cart.add(item);
        }
        cart
    }
}
