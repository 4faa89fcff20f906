use pretty_assertions::assert_eq;
use storefront_core::{
    cart_total, order_message, Amount, CurrencyFormatter, Fulfillment, LocaleCurrency,
};
use storefront_test_utils::{bundle_item, cart_item, cart_of, checkout_of, options_of};

#[test]
fn test_full_delivery_message() {
    let mut cart = cart_of([
        cart_item(
            "Muzzarella",
            options_of(&[("Pizzas", "Muzzarella", 8000, 1), ("Tamaño", "Grande", 2000, 1)]),
        ),
        bundle_item(
            "Docena de empanadas",
            9000,
            options_of(&[("Promociones", "Carne", 0, 6), ("Promociones", "Pollo", 0, 6)]),
        ),
    ]);
    cart.apply_fulfillment(Fulfillment::Delivery, 600);
    let checkout = checkout_of(&[
        ("Forma de retiro", "Delivery"),
        ("Dirección", "Av. Siempreviva 742"),
    ]);

    let message = order_message(&cart, &checkout, &LocaleCurrency::default());

    let expected = "\
* Muzzarella
  Muzzarella: 1
  Grande: 1
$ 10.000

* Docena de empanadas
  Carne: 6
  Pollo: 6
$ 9.000

* Forma de retiro: Delivery
* Dirección: Av. Siempreviva 742

Total: $ 19.600";
    assert_eq!(message, expected);
}

#[test]
fn test_unpriced_options_show_price() {
    let cart = cart_of([cart_item("Pizza", options_of(&[("Tamaño", "Grande", 300, 0)]))]);
    let message = order_message(&cart, &checkout_of(&[]), &LocaleCurrency::default());

    assert_eq!(message, "* Pizza\n  Grande: $ 300\n$ 0\n\nTotal: $ 0");
}

#[test]
fn test_message_ends_with_formatted_total() {
    let formatter = |amount: Amount| format!("ARS {amount}");
    let cart = cart_of([
        cart_item("A", options_of(&[("A", "x", 1234, 3)])),
        cart_item("B", options_of(&[("B", "y", 10, 1)])),
    ]);
    let checkout = checkout_of(&[("Medio de pago", "Efectivo")]);

    let message = order_message(&cart, &checkout, &formatter);
    let last = message.lines().last().unwrap();

    assert_eq!(last, format!("Total: {}", formatter.format(cart_total(&cart))));
}
