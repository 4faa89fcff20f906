//! Storefront Core
//!
//! Business logic behind an online ordering storefront's cart:
//! - Prices cart items and totals, with a single delivery surcharge policy
//! - Tracks the options chosen for a product before it enters the cart
//! - Collects checkout answers (delivery or pickup, address notes)
//! - Writes the plain-text order message sent to the store
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let storefront = Storefront::new(StorefrontConfig::new().with_delivery_fee(600));
//! let mut cart = Cart::new();
//! let mut checkout = Checkout::new();
//!
//! let product = Product {
//!     id: "muzza".into(),
//!     title: "Muzzarella".into(),
//!     category: "Pizzas".into(),
//!     description: String::new(),
//!     image: String::new(),
//!     options: Default::default(),
//!     price: 8000,
//!     minimum: 0,
//!     multiple: false,
//!     disabled: false,
//! };
//!
//! let item = storefront.configure(&product).submit().unwrap();
//! cart.add(item);
//! storefront.answer(&mut checkout, &mut cart, "Forma de retiro", "Delivery");
//!
//! assert_eq!(storefront.total(&cart), 8600);
//! assert!(storefront.message(&cart, &checkout).ends_with("Total: $ 8.600"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod cart;
pub mod checkout;
pub mod config;
pub mod configurator;
pub mod currency;
pub mod error;
pub mod pricing;
pub mod storefront;
pub mod summary;
pub mod types;

// Re-exports for convenience
pub use cart::Cart;
pub use checkout::{answer_field, visible_fields, Checkout, Field, Fulfillment};
pub use config::{CatalogSettings, CurrencySettings, DeliverySettings, StorefrontConfig};
pub use configurator::{CategoryMode, CategoryView, ItemConfiguration};
pub use currency::{CurrencyFormatter, LocaleCurrency};
pub use error::{ConfigError, ConfigurationError, StorefrontError};
pub use pricing::{cart_total, item_price, options_price};
pub use storefront::Storefront;
pub use summary::{option_entries, options_summary, order_message};
pub use types::{Amount, CartItem, ItemId, OptionMap, Product, ProductOption};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the storefront
    pub use crate::{
        cart_total, item_price, options_summary, order_message, Cart, CartItem, Checkout,
        CurrencyFormatter, Field, Fulfillment, ItemConfiguration, ItemId, Product, ProductOption,
        Storefront, StorefrontConfig,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
