//! Pricing engine
//!
//! Pure functions over cart data. The delivery surcharge is a cart-level flat
//! fee applied once; see [`Cart::delivery_fee`].

use crate::cart::Cart;
use crate::types::{Amount, CartItem, OptionMap};

/// Price of a single cart item
///
/// Bundles (`multiple`) are sold at their own price. Everything else is the
/// sum of `price * quantity` over every selected option; no options prices
/// to zero.
#[must_use]
pub fn item_price(item: &CartItem) -> Amount {
    if item.multiple {
        return item.price;
    }

    options_price(&item.options)
}

/// Sum of `price * quantity` across every category
///
/// Saturates at the `Amount` bounds instead of overflowing.
#[must_use]
pub fn options_price(options: &OptionMap) -> Amount {
    options
        .values()
        .flat_map(|options| options.iter())
        .map(|option| option.price.saturating_mul(Amount::from(option.quantity)))
        .fold(0, Amount::saturating_add)
}

/// Cart total: every item's price plus the delivery surcharge, once
#[must_use]
pub fn cart_total(cart: &Cart) -> Amount {
    let items = cart.items().map(item_price).fold(0, Amount::saturating_add);
    let total = items.saturating_add(cart.delivery_fee());

    tracing::debug!(items = cart.len(), subtotal = items, total, "computed cart total");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductOption;

    fn item(options: OptionMap) -> CartItem {
        CartItem {
            id: "p1".into(),
            title: "Pizza".into(),
            category: "Pizzas".into(),
            description: String::new(),
            image: String::new(),
            price: 5000,
            quantity: 1,
            multiple: false,
            minimum: 0,
            delivery_price: 0,
            options,
        }
    }

    #[test]
    fn sums_options_across_categories() {
        let mut options = OptionMap::new();
        options.insert(
            "A".into(),
            vec![ProductOption::new("a", "Grande", "A", 100).with_quantity(2)],
        );
        options.insert(
            "B".into(),
            vec![ProductOption::new("b", "Muzza", "B", 50).with_quantity(1)],
        );

        assert_eq!(item_price(&item(options)), 250);
    }

    #[test]
    fn bundle_price_is_authoritative() {
        let mut options = OptionMap::new();
        options.insert(
            "Promociones".into(),
            vec![ProductOption::new("a", "Carne", "Promociones", 900).with_quantity(12)],
        );
        let mut bundle = item(options);
        bundle.multiple = true;

        assert_eq!(item_price(&bundle), 5000);
    }

    #[test]
    fn no_options_prices_to_zero() {
        assert_eq!(item_price(&item(OptionMap::new())), 0);
    }

    #[test]
    fn discounts_reduce_price() {
        let mut options = OptionMap::new();
        options.insert(
            "Extras".into(),
            vec![
                ProductOption::new("a", "Base", "Extras", 1000).with_quantity(1),
                ProductOption::new("b", "Sin queso", "Extras", -200).with_quantity(1),
            ],
        );

        assert_eq!(item_price(&item(options)), 800);
    }

    #[test]
    fn huge_quantities_saturate() {
        let mut options = OptionMap::new();
        options.insert(
            "Extras".into(),
            vec![
                ProductOption::new("a", "Oro", "Extras", Amount::MAX / 2).with_quantity(u32::MAX),
                ProductOption::new("b", "Plata", "Extras", Amount::MAX).with_quantity(1),
            ],
        );

        assert_eq!(item_price(&item(options)), Amount::MAX);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&Cart::new()), 0);
    }
}
