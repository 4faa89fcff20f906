//! Storefront facade
//!
//! Binds a [`StorefrontConfig`] to the pure pricing and formatting functions
//! so callers do not have to thread settings through every call.

use crate::cart::Cart;
use crate::checkout::{answer_field, visible_fields, Checkout, Field, Fulfillment};
use crate::config::StorefrontConfig;
use crate::configurator::ItemConfiguration;
use crate::currency::{CurrencyFormatter, LocaleCurrency};
use crate::pricing::cart_total;
use crate::summary::order_message;
use crate::types::{Amount, Product};

/// Configured storefront
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    currency: LocaleCurrency,
}

impl Storefront {
    /// Create storefront from configuration
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let currency = LocaleCurrency::new(config.currency.clone());
        Self { config, currency }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Currency formatter in use
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &LocaleCurrency {
        &self.currency
    }

    /// Format an amount with the store's currency
    #[inline]
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        self.currency.format(amount)
    }

    /// Cart total including the delivery surcharge
    #[inline]
    #[must_use]
    pub fn total(&self, cart: &Cart) -> Amount {
        cart_total(cart)
    }

    /// Order message with the store's currency
    #[must_use]
    pub fn message(&self, cart: &Cart, checkout: &Checkout) -> String {
        order_message(cart, checkout, &self.currency)
    }

    /// Start configuring a product
    #[must_use]
    pub fn configure(&self, product: &Product) -> ItemConfiguration {
        ItemConfiguration::from_product(product)
    }

    /// Record a checkout answer, applying the surcharge policy
    pub fn answer(
        &self,
        checkout: &mut Checkout,
        cart: &mut Cart,
        title: &str,
        value: &str,
    ) -> Option<Fulfillment> {
        answer_field(checkout, cart, &self.config.delivery, title, value)
    }

    /// Bring the cart's surcharge in line with answers already given
    pub fn sync_fulfillment(&self, cart: &mut Cart, checkout: &Checkout) -> Option<Fulfillment> {
        let fulfillment = checkout.fulfillment(&self.config.delivery)?;
        cart.apply_fulfillment(fulfillment, self.config.delivery.fee);
        Some(fulfillment)
    }

    /// Fields to show for the cart
    #[must_use]
    pub fn fields<'a>(&self, fields: &'a [Field], cart: &Cart) -> Vec<&'a Field> {
        visible_fields(fields, cart)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
