//! Core types for the storefront
//!
//! Defines the catalog and cart data model:
//! - Product options and the ordered option map
//! - Catalog products
//! - Cart items and their identifiers

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Amount of money in whole currency units
///
/// Signed: options may carry a negative price (discounts).
pub type Amount = i64;

/// Options grouped by category, in catalog order
pub type OptionMap = IndexMap<String, Vec<ProductOption>>;

/// Cart entry identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Identifier following this one, `None` at the end of the range
    #[inline]
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable configuration choice within a category (e.g. a topping)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Amount,
    #[serde(default)]
    pub quantity: u32,
}

impl ProductOption {
    /// Create option with zero quantity
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Amount,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            description: String::new(),
            image: String::new(),
            price,
            quantity: 0,
        }
    }

    /// With quantity
    #[inline]
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Options are matched by title within their category
    #[inline]
    #[must_use]
    pub fn same_choice(&self, other: &ProductOption) -> bool {
        self.category == other.category && self.title == other.title
    }
}

/// Catalog entry a cart item is created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub options: OptionMap,
    pub price: Amount,
    #[serde(default)]
    pub minimum: u32,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// A product selection placed in the cart
///
/// When `multiple` is set the item is a fixed-price bundle and `price` is
/// authoritative; otherwise the price is derived from `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Amount,
    pub quantity: u32,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub minimum: u32,
    /// Per-item shipping price as listed by the catalog; the order surcharge
    /// lives on [`Cart`](crate::cart::Cart)
    #[serde(default)]
    pub delivery_price: Amount,
    #[serde(default)]
    pub options: OptionMap,
}

impl CartItem {
    /// Create a single unit of a catalog product with no options selected
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
            multiple: product.multiple,
            minimum: product.minimum,
            delivery_price: 0,
            options: OptionMap::new(),
        }
    }

    /// The item itself expressed as an option of its own category
    #[must_use]
    pub fn as_option(&self) -> ProductOption {
        ProductOption {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            price: self.price,
            quantity: 1,
        }
    }

    /// Sum of option quantities across every category
    #[must_use]
    pub fn selected_quantity(&self) -> u32 {
        self.options
            .values()
            .flat_map(|options| options.iter())
            .map(|option| option.quantity)
            .sum()
    }
}
