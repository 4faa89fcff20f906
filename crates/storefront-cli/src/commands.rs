//! Subcommand implementations
//!
//! Each command returns the text to print so it can be tested without a
//! process.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use storefront_core::{Cart, Checkout, Field, Storefront, StorefrontConfig};

pub(crate) fn load_config(path: Option<&Path>) -> Result<StorefrontConfig> {
    match path {
        Some(path) => StorefrontConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(StorefrontConfig::default()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {what} from {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("decoding {what} in {}", path.display()))
}

/// Cart and checkout documents, with the surcharge already in step with the answers
#[derive(Debug)]
pub(crate) struct Order {
    pub(crate) cart: Cart,
    pub(crate) checkout: Checkout,
}

impl Order {
    pub(crate) fn load(storefront: &Storefront, cart: &Path, checkout: Option<&Path>) -> Result<Self> {
        let mut cart: Cart = read_json(cart, "cart")?;
        let checkout = match checkout {
            Some(path) => read_json(path, "checkout")?,
            None => Checkout::new(),
        };

        match storefront.sync_fulfillment(&mut cart, &checkout) {
            Some(method) => tracing::info!(?method, "fulfillment taken from checkout"),
            None => tracing::debug!("no fulfillment answer, keeping stored surcharge"),
        }

        Ok(Self { cart, checkout })
    }
}

pub(crate) fn total(storefront: &Storefront, order: &Order) -> String {
    storefront.format(storefront.total(&order.cart))
}

pub(crate) fn message(storefront: &Storefront, order: &Order) -> String {
    storefront.message(&order.cart, &order.checkout)
}

pub(crate) fn fields(storefront: &Storefront, order: &Order, fields: &Path) -> Result<String> {
    let fields: Vec<Field> = read_json(fields, "fields")?;
    let lines: Vec<_> = storefront
        .fields(&fields, &order.cart)
        .into_iter()
        .map(|field| {
            let answer = order.checkout.get(field.title()).unwrap_or("-");
            match field.note() {
                Some(note) => format!("{}: {answer} ({note})", field.title()),
                None => format!("{}: {answer}", field.title()),
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storefront_test_utils::{cart_item, cart_of, default_fields, options_of};
    use tempfile::NamedTempFile;

    fn json_file(value: &impl serde::Serialize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(value).unwrap()).unwrap();
        file
    }

    fn cart_file() -> NamedTempFile {
        json_file(&cart_of([cart_item(
            "Muzzarella",
            options_of(&[("Pizzas", "Muzzarella", 8000, 2)]),
        )]))
    }

    #[test]
    fn total_applies_delivery_from_checkout() {
        let storefront = Storefront::default();
        let cart = cart_file();
        let checkout = json_file(&serde_json::json!({"Forma de retiro": "Delivery"}));

        let order = Order::load(&storefront, cart.path(), Some(checkout.path())).unwrap();
        assert_eq!(total(&storefront, &order), "$ 16.600");
    }

    #[test]
    fn message_without_checkout() {
        let storefront = Storefront::default();
        let cart = cart_file();

        let order = Order::load(&storefront, cart.path(), None).unwrap();
        assert_eq!(
            message(&storefront, &order),
            "* Muzzarella\n  Muzzarella: 2\n$ 16.000\n\nTotal: $ 16.000"
        );
    }

    #[test]
    fn fields_hide_address_for_pickup() {
        let storefront = Storefront::default();
        let cart = cart_file();
        let checkout = json_file(&serde_json::json!({"Forma de retiro": "Retiro en el local"}));
        let fields = json_file(&default_fields());

        let order = Order::load(&storefront, cart.path(), Some(checkout.path())).unwrap();
        let listed = super::fields(&storefront, &order, fields.path()).unwrap();
        assert_eq!(listed, "Forma de retiro: Retiro en el local\nMedio de pago: -");
    }

    #[test]
    fn bad_cart_names_the_file() {
        let storefront = Storefront::default();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Order::load(&storefront, file.path(), None).unwrap_err();
        assert!(err.to_string().starts_with("decoding cart in"));
    }

    #[test]
    fn default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), StorefrontConfig::default());
    }
}
