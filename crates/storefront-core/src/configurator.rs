//! Item configuration
//!
//! Option selection for one product before it goes into the cart. Each
//! transition returns a new snapshot and leaves the old one untouched.
//!
//! # Rules
//! - [`ItemConfiguration::select`]: single choice, replaces the category
//! - [`ItemConfiguration::add`]: +1, rejected once a bundle reaches `minimum`
//! - [`ItemConfiguration::remove`]: -1, never below 1 for a present option
//! - Bundles submit at exactly `minimum` units, other items at one or more

use crate::config::CatalogSettings;
use crate::error::ConfigurationError;
use crate::pricing::item_price;
use crate::types::{Amount, CartItem, OptionMap, Product, ProductOption};

/// How a category's options are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryMode {
    /// Radio: one option replaces the previous one
    SingleChoice,
    /// Counter: each option carries its own quantity
    Accumulate,
}

impl CategoryMode {
    /// Mode of a category under the given catalog settings
    #[must_use]
    pub fn of(category: &str, settings: &CatalogSettings) -> Self {
        if settings
            .accumulating_categories
            .iter()
            .any(|c| c == category)
        {
            CategoryMode::Accumulate
        } else {
            CategoryMode::SingleChoice
        }
    }
}

/// A category offered by the product, with its mode
#[derive(Debug, Clone, Copy)]
pub struct CategoryView<'a> {
    pub title: &'a str,
    pub mode: CategoryMode,
    pub options: &'a [ProductOption],
}

/// Snapshot of the options chosen for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemConfiguration {
    item: CartItem,
    available: OptionMap,
}

impl ItemConfiguration {
    /// Start configuring a product
    ///
    /// Nothing is selected, except that a regular item starts with one unit
    /// of itself under its own category.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let mut item = CartItem::from_product(product);
        if !item.multiple {
            item.options
                .insert(item.category.clone(), vec![item.as_option()]);
        }

        Self {
            item,
            available: product.options.clone(),
        }
    }

    /// Item as currently configured
    #[inline]
    #[must_use]
    pub fn item(&self) -> &CartItem {
        &self.item
    }

    /// Categories offered by the product, in catalog order
    #[must_use]
    pub fn categories<'a>(&'a self, settings: &CatalogSettings) -> Vec<CategoryView<'a>> {
        self.available
            .iter()
            .map(|(title, options)| CategoryView {
                title,
                mode: CategoryMode::of(title, settings),
                options,
            })
            .collect()
    }

    fn with_options(&self, category: &str, options: Vec<ProductOption>) -> Self {
        let mut next = self.clone();
        next.item.options.insert(category.to_string(), options);
        next
    }

    /// Choose `option` as the only selection of its category
    #[must_use]
    pub fn select(&self, option: &ProductOption) -> Self {
        self.with_options(&option.category, vec![option.clone().with_quantity(1)])
    }

    /// Add one unit of `option`
    ///
    /// Bundles silently ignore the addition once `minimum` units are chosen.
    #[must_use]
    pub fn add(&self, option: &ProductOption) -> Self {
        if self.item.multiple && self.total_quantity() >= self.item.minimum {
            tracing::debug!(
                option = %option.title,
                minimum = self.item.minimum,
                "bundle full, ignoring addition"
            );
            return self.clone();
        }

        let mut options = self.selected(&option.category).to_vec();
        match options.iter_mut().find(|o| o.same_choice(option)) {
            Some(existing) => existing.quantity += 1,
            None => options.push(option.clone().with_quantity(1)),
        }
        self.with_options(&option.category, options)
    }

    /// Remove one unit of `option`, keeping at least one if present
    #[must_use]
    pub fn remove(&self, option: &ProductOption) -> Self {
        let mut options = self.selected(&option.category).to_vec();
        match options.iter_mut().find(|o| o.same_choice(option)) {
            Some(existing) if existing.quantity > 1 => existing.quantity -= 1,
            _ => return self.clone(),
        }
        self.with_options(&option.category, options)
    }

    fn selected(&self, category: &str) -> &[ProductOption] {
        self.item
            .options
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Units of `option` currently chosen
    #[must_use]
    pub fn quantity_of(&self, option: &ProductOption) -> u32 {
        self.selected(&option.category)
            .iter()
            .find(|o| o.same_choice(option))
            .map_or(0, |o| o.quantity)
    }

    /// Units chosen across every category
    #[inline]
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.item.selected_quantity()
    }

    /// Price of the item as configured
    #[inline]
    #[must_use]
    pub fn price(&self) -> Amount {
        item_price(&self.item)
    }

    /// Price to show: the base price until something is chosen
    #[must_use]
    pub fn display_price(&self) -> Amount {
        if self.total_quantity() == 0 {
            self.item.price
        } else {
            self.price()
        }
    }

    fn check(&self) -> Result<(), ConfigurationError> {
        let selected = self.total_quantity();

        if self.item.multiple {
            if selected != self.item.minimum {
                return Err(ConfigurationError::QuantityMismatch {
                    required: self.item.minimum,
                    selected,
                });
            }
        } else if selected == 0 {
            return Err(ConfigurationError::NothingSelected);
        }
        Ok(())
    }

    /// Check if the item can be added to the cart
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check().is_ok()
    }

    /// Finish configuring and produce the cart item
    pub fn submit(&self) -> Result<CartItem, ConfigurationError> {
        self.check()?;
        tracing::debug!(title = %self.item.title, price = self.price(), "item configured");
        Ok(self.item.clone())
    }
}
